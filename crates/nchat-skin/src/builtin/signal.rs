// ---------------------------------------------------------------------------
// Signal: privacy-first blue bubbles, no online status, screen security.
// ---------------------------------------------------------------------------

use super::Platform;

const SKIN: &str = r##"
id = "signal"
name = "Signal"
description = "Ultramarine outgoing bubbles on a neutral canvas"
version = "1.0.0"

[colors]
primary = "#2C6BED"
secondary = "#5E5E5E"
accent = "#3A76F0"
background = "#FFFFFF"
surface = "#F6F6F6"
text = "#1B1B1B"
textSecondary = "#5E5E5E"
muted = "#848484"
border = "#E9E9E9"
success = "#4CAF50"
warning = "#F0A202"
error = "#D00B0B"
info = "#2C6BED"
buttonPrimaryBg = "#2C6BED"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#E9E9E9"
buttonSecondaryText = "#1B1B1B"

[darkMode.colors]
primary = "#2C6BED"
secondary = "#B9B9B9"
accent = "#3A76F0"
background = "#121212"
surface = "#1B1B1B"
text = "#E9E9E9"
textSecondary = "#B9B9B9"
muted = "#848484"
border = "#2E2E2E"
success = "#4CAF50"
warning = "#F0A202"
error = "#F44336"
info = "#3A76F0"
buttonPrimaryBg = "#2C6BED"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#2E2E2E"
buttonSecondaryText = "#E9E9E9"

[typography]
fontFamily = "Inter, -apple-system, Segoe UI, Roboto, sans-serif"
fontFamilyMono = "SF Mono, Menlo, monospace"
fontSizeSm = "13px"
fontSizeBase = "14px"
fontSizeLg = "16px"
fontSizeXl = "20px"
fontWeightNormal = 400
fontWeightMedium = 500
fontWeightBold = 600
lineHeight = 1.43
letterSpacing = "-0.006em"

[spacing]
messagePadding = "8px"
messageGap = "2px"
sidebarWidth = "320px"
headerHeight = "52px"
inputHeight = "40px"
avatarSizeSm = "28px"
avatarSizeMd = "36px"
avatarSizeLg = "80px"

[borderRadius]
none = "0px"
sm = "4px"
md = "8px"
lg = "18px"
xl = "24px"
full = "9999px"

[icons]
style = "outline"
set = "signal"
strokeWidth = 1.5

[components]
messageLayout = "bubbles"
avatarShape = "circle"
buttonStyle = "filled"
inputStyle = "filled"
sidebarStyle = "full"
headerStyle = "solid"
scrollbarStyle = "thin"
"##;

const BEHAVIOR: &str = r#"
id = "signal"
name = "Signal"
description = "24 hour edits, sealed sender, no presence leakage"

[messaging]
editWindow = 86400000
deleteWindow = 86400000
deleteForEveryone = true
maxMessageLength = 65536
reactions = true
maxReactionsPerMessage = 1
threadingModel = "reply"
readReceipts = true
typingIndicators = true
forwarding = true
pinning = false
maxPinnedMessages = 0
scheduledMessages = false
voiceMessages = true
disappearingMessages = true

[channels]
directMessages = true
groupChats = true
publicChannels = false
privateChannels = true
broadcastChannels = false
maxGroupSize = 1000
hierarchy = "flat"

[presence]
showOnlineStatus = false
showLastSeen = false
customStatus = false
states = ["online", "offline"]
idleTimeout = 0

[calls]
voiceCalls = true
videoCalls = true
groupCalls = true
maxParticipants = 50
screenSharing = true
recording = false

[notifications]
defaultLevel = "all"
mentionEveryone = false
keywordAlerts = false
doNotDisturb = false
badgeStyle = "count"

[moderation]
roles = true
slowMode = false
maxSlowModeInterval = 0
automod = false
reportMessages = true
banUsers = true

[privacy]
endToEndEncryption = "always"
phoneNumberRequired = true
usernameDiscovery = true
screenshotProtection = true
linkPreviews = true

[features]
fileSharing = true
maxFileSizeMb = 100
stickers = true
gifs = true
bots = false
polls = false
stories = true
markdown = false
codeBlocks = false
search = true
"#;

const SKIN_EXTENSION: &str = r##"
id = "signal"

[colors]
bubbleOutgoing = "#2C6BED"
bubbleIncoming = "#E9E9E9"

[darkColors]
bubbleIncoming = "#3B3B3B"

[shadows]
composer = "0 -1px 0 rgba(0, 0, 0, 0.08)"
"##;

const BEHAVIOR_EXTENSION: &str = r#"
id = "signal"

[features]
sealedSender = true
safetyNumbers = true
incognitoKeyboard = true

[limits]
maxAttachmentsPerMessage = 32
"#;

pub(super) const PLATFORM: Platform = Platform {
    id: "signal",
    name: "Signal",
    description: "Signal visuals with Signal privacy defaults",
    skin: SKIN,
    behavior: BEHAVIOR,
    skin_extension: SKIN_EXTENSION,
    behavior_extension: BEHAVIOR_EXTENSION,
};
