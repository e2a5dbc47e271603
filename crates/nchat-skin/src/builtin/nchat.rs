// ---------------------------------------------------------------------------
// nchat: the blended house identity and the fallback for unknown ids.
// ---------------------------------------------------------------------------

use super::Platform;

const SKIN: &str = r##"
id = "nchat"
name = "nchat"
description = "Indigo house style blending bubble chat with workspace chrome"
version = "1.0.0"

[colors]
primary = "#6366F1"
secondary = "#64748B"
accent = "#06B6D4"
background = "#FFFFFF"
surface = "#F8FAFC"
text = "#0F172A"
textSecondary = "#475569"
muted = "#94A3B8"
border = "#E2E8F0"
success = "#16A34A"
warning = "#D97706"
error = "#DC2626"
info = "#0284C7"
buttonPrimaryBg = "#4F46E5"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#F1F5F9"
buttonSecondaryText = "#0F172A"

[darkMode.colors]
primary = "#818CF8"
secondary = "#94A3B8"
accent = "#22D3EE"
background = "#0F172A"
surface = "#1E293B"
text = "#F1F5F9"
textSecondary = "#CBD5E1"
muted = "#64748B"
border = "#334155"
success = "#22C55E"
warning = "#F59E0B"
error = "#F87171"
info = "#38BDF8"
buttonPrimaryBg = "#4F46E5"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#1E293B"
buttonSecondaryText = "#F1F5F9"

[typography]
fontFamily = "Inter, system-ui, -apple-system, sans-serif"
fontFamilyMono = "JetBrains Mono, Fira Code, monospace"
fontSizeSm = "14px"
fontSizeBase = "16px"
fontSizeLg = "18px"
fontSizeXl = "20px"
fontWeightNormal = 400
fontWeightMedium = 500
fontWeightBold = 600
lineHeight = 1.5
letterSpacing = "0"

[spacing]
messagePadding = "12px"
messageGap = "8px"
sidebarWidth = "280px"
headerHeight = "56px"
inputHeight = "48px"
avatarSizeSm = "24px"
avatarSizeMd = "36px"
avatarSizeLg = "64px"

[borderRadius]
none = "0px"
sm = "4px"
md = "8px"
lg = "12px"
xl = "16px"
full = "9999px"

[icons]
style = "outline"
set = "lucide"
strokeWidth = 2.0

[components]
messageLayout = "bubbles"
avatarShape = "rounded"
buttonStyle = "filled"
inputStyle = "outline"
sidebarStyle = "full"
headerStyle = "blurred"
scrollbarStyle = "thin"
"##;

const BEHAVIOR: &str = r#"
id = "nchat"
name = "nchat"
description = "Everything on: threads, roles, presence, optional encryption"

[messaging]
editWindow = 0
deleteWindow = 0
deleteForEveryone = true
maxMessageLength = 4000
reactions = true
maxReactionsPerMessage = 0
threadingModel = "thread"
readReceipts = true
typingIndicators = true
forwarding = true
pinning = true
maxPinnedMessages = 50
scheduledMessages = true
voiceMessages = true
disappearingMessages = true

[channels]
directMessages = true
groupChats = true
publicChannels = true
privateChannels = true
broadcastChannels = true
maxGroupSize = 0
hierarchy = "categories"

[presence]
showOnlineStatus = true
showLastSeen = true
customStatus = true
states = ["online", "away", "busy", "invisible", "offline"]
idleTimeout = 300000

[calls]
voiceCalls = true
videoCalls = true
groupCalls = true
maxParticipants = 100
screenSharing = true
recording = true

[notifications]
defaultLevel = "all"
mentionEveryone = true
keywordAlerts = true
doNotDisturb = true
badgeStyle = "count"

[moderation]
roles = true
slowMode = true
maxSlowModeInterval = 21600000
automod = true
reportMessages = true
banUsers = true

[privacy]
endToEndEncryption = "optional"
phoneNumberRequired = false
usernameDiscovery = true
screenshotProtection = false
linkPreviews = true

[features]
fileSharing = true
maxFileSizeMb = 100
stickers = true
gifs = true
bots = true
polls = true
stories = false
markdown = true
codeBlocks = true
search = true
"#;

const SKIN_EXTENSION: &str = r##"
id = "nchat"

[colors]
gradientStart = "#6366F1"
gradientEnd = "#06B6D4"

[darkColors]
gradientStart = "#818CF8"
gradientEnd = "#22D3EE"

[shadows]
glow = "0 0 0 3px rgba(99, 102, 241, 0.35)"
"##;

const BEHAVIOR_EXTENSION: &str = r#"
id = "nchat"

[features]
platformSwitcher = true
"#;

pub(super) const PLATFORM: Platform = Platform {
    id: "nchat",
    name: "nchat",
    description: "The blended nchat identity",
    skin: SKIN,
    behavior: BEHAVIOR,
    skin_extension: SKIN_EXTENSION,
    behavior_extension: BEHAVIOR_EXTENSION,
};
