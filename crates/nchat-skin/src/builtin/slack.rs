// ---------------------------------------------------------------------------
// Slack: aubergine workspace chat with threads and huddles.
// ---------------------------------------------------------------------------

use super::Platform;

const SKIN: &str = r##"
id = "slack"
name = "Slack"
description = "Aubergine workspace chat with compact message rows"
version = "1.0.0"

[colors]
primary = "#611F69"
secondary = "#1264A3"
accent = "#ECB22E"
background = "#FFFFFF"
surface = "#F8F8F8"
text = "#1D1C1D"
textSecondary = "#616061"
muted = "#868686"
border = "#DDDDDD"
success = "#2BAC76"
warning = "#ECB22E"
error = "#E01E5A"
info = "#1264A3"
buttonPrimaryBg = "#007A5A"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#FFFFFF"
buttonSecondaryText = "#1D1C1D"

[darkMode.colors]
primary = "#C695CE"
secondary = "#1D9BD1"
accent = "#ECB22E"
background = "#1A1D21"
surface = "#222529"
text = "#D1D2D3"
textSecondary = "#ABABAD"
muted = "#868686"
border = "#35373B"
success = "#2BAC76"
warning = "#ECB22E"
error = "#E01E5A"
info = "#1D9BD1"
buttonPrimaryBg = "#007A5A"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#222529"
buttonSecondaryText = "#D1D2D3"

[typography]
fontFamily = "Slack-Lato, Lato, appleLogo, sans-serif"
fontFamilyMono = "Monaco, Menlo, Consolas, Courier New, monospace"
fontSizeSm = "13px"
fontSizeBase = "15px"
fontSizeLg = "18px"
fontSizeXl = "22px"
fontWeightNormal = 400
fontWeightMedium = 700
fontWeightBold = 900
lineHeight = 1.46668
letterSpacing = "0"

[spacing]
messagePadding = "8px"
messageGap = "4px"
sidebarWidth = "260px"
headerHeight = "49px"
inputHeight = "44px"
avatarSizeSm = "20px"
avatarSizeMd = "36px"
avatarSizeLg = "72px"

[borderRadius]
none = "0px"
sm = "4px"
md = "6px"
lg = "8px"
xl = "12px"
full = "9999px"

[icons]
style = "outline"
set = "slack"
strokeWidth = 1.5

[components]
messageLayout = "compact"
avatarShape = "rounded"
buttonStyle = "filled"
inputStyle = "outline"
sidebarStyle = "full"
headerStyle = "solid"
scrollbarStyle = "overlay"
"##;

const BEHAVIOR: &str = r#"
id = "slack"
name = "Slack"
description = "Unlimited edits, side-panel threads, workspace hierarchy"

[messaging]
editWindow = 0
deleteWindow = 0
deleteForEveryone = true
maxMessageLength = 40000
reactions = true
maxReactionsPerMessage = 23
threadingModel = "thread"
readReceipts = false
typingIndicators = true
forwarding = true
pinning = true
maxPinnedMessages = 100
scheduledMessages = true
voiceMessages = true
disappearingMessages = false

[channels]
directMessages = true
groupChats = true
publicChannels = true
privateChannels = true
broadcastChannels = true
maxGroupSize = 9
hierarchy = "workspaces"

[presence]
showOnlineStatus = true
showLastSeen = false
customStatus = true
states = ["online", "away"]
idleTimeout = 1800000

[calls]
voiceCalls = true
videoCalls = true
groupCalls = true
maxParticipants = 50
screenSharing = true
recording = false

[notifications]
defaultLevel = "mentions"
mentionEveryone = true
keywordAlerts = true
doNotDisturb = true
badgeStyle = "count"

[moderation]
roles = true
slowMode = false
maxSlowModeInterval = 0
automod = false
reportMessages = true
banUsers = true

[privacy]
endToEndEncryption = "none"
phoneNumberRequired = false
usernameDiscovery = true
screenshotProtection = false
linkPreviews = true

[features]
fileSharing = true
maxFileSizeMb = 1024
stickers = false
gifs = true
bots = true
polls = false
stories = false
markdown = true
codeBlocks = true
search = true
"#;

const SKIN_EXTENSION: &str = r##"
id = "slack"

[colors]
sidebarBackground = "#3F0E40"
sidebarText = "#FFFFFF"
mentionBadge = "#CD2553"
presenceActive = "#2BAC76"

[darkColors]
sidebarBackground = "#19171D"
sidebarText = "#D1D2D3"

[shadows]
menu = "0 0 0 1px rgba(29, 28, 29, 0.13), 0 4px 12px 0 rgba(0, 0, 0, 0.12)"
"##;

const BEHAVIOR_EXTENSION: &str = r#"
id = "slack"

[features]
huddles = true
workflows = true
canvases = true

[limits]
messageHistoryDays = 90
maxHuddleParticipants = 50
"#;

pub(super) const PLATFORM: Platform = Platform {
    id: "slack",
    name: "Slack",
    description: "Slack visuals with Slack workspace behavior",
    skin: SKIN,
    behavior: BEHAVIOR,
    skin_extension: SKIN_EXTENSION,
    behavior_extension: BEHAVIOR_EXTENSION,
};
