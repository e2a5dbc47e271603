// ---------------------------------------------------------------------------
// Telegram: blue cloud chat with folders, big groups and bots.
// ---------------------------------------------------------------------------

use super::Platform;

const SKIN: &str = r##"
id = "telegram"
name = "Telegram"
description = "Blue accents, rounded bubbles, violet night mode"
version = "1.0.0"

[colors]
primary = "#3390EC"
secondary = "#707579"
accent = "#4FAE4E"
background = "#FFFFFF"
surface = "#F4F4F5"
text = "#000000"
textSecondary = "#707579"
muted = "#A2ACB4"
border = "#DADCE0"
success = "#4FAE4E"
warning = "#E6A23C"
error = "#E53935"
info = "#3390EC"
buttonPrimaryBg = "#3390EC"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#F4F4F5"
buttonSecondaryText = "#3390EC"

[darkMode.colors]
primary = "#8774E1"
secondary = "#AAAAAA"
accent = "#5CC85A"
background = "#212121"
surface = "#2B2B2B"
text = "#FFFFFF"
textSecondary = "#AAAAAA"
muted = "#707579"
border = "#303030"
success = "#5CC85A"
warning = "#FFB02E"
error = "#FF595A"
info = "#8774E1"
buttonPrimaryBg = "#8774E1"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#2B2B2B"
buttonSecondaryText = "#FFFFFF"

[typography]
fontFamily = "Roboto, -apple-system, Helvetica Neue, sans-serif"
fontFamilyMono = "Menlo, Consolas, monospace"
fontSizeSm = "14px"
fontSizeBase = "16px"
fontSizeLg = "18px"
fontSizeXl = "20px"
fontWeightNormal = 400
fontWeightMedium = 500
fontWeightBold = 600
lineHeight = 1.3125
letterSpacing = "0"

[spacing]
messagePadding = "8px"
messageGap = "4px"
sidebarWidth = "420px"
headerHeight = "56px"
inputHeight = "48px"
avatarSizeSm = "32px"
avatarSizeMd = "42px"
avatarSizeLg = "54px"

[borderRadius]
none = "0px"
sm = "6px"
md = "10px"
lg = "15px"
xl = "18px"
full = "9999px"

[icons]
style = "outline"
set = "telegram"
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
id = "telegram"
name = "Telegram"
description = "48 hour edits, unlimited deletes, 200k member groups"

[messaging]
editWindow = 172800000
deleteWindow = 0
deleteForEveryone = true
maxMessageLength = 4096
reactions = true
maxReactionsPerMessage = 3
threadingModel = "topic"
readReceipts = true
typingIndicators = true
forwarding = true
pinning = true
maxPinnedMessages = 0
scheduledMessages = true
voiceMessages = true
disappearingMessages = true

[channels]
directMessages = true
groupChats = true
publicChannels = true
privateChannels = true
broadcastChannels = true
maxGroupSize = 200000
hierarchy = "folders"

[presence]
showOnlineStatus = true
showLastSeen = true
customStatus = false
states = ["online", "offline"]
idleTimeout = 0

[calls]
voiceCalls = true
videoCalls = true
groupCalls = true
maxParticipants = 1000
screenSharing = true
recording = true

[notifications]
defaultLevel = "all"
mentionEveryone = false
keywordAlerts = false
doNotDisturb = true
badgeStyle = "count"

[moderation]
roles = true
slowMode = true
maxSlowModeInterval = 3600000
automod = false
reportMessages = true
banUsers = true

[privacy]
endToEndEncryption = "optional"
phoneNumberRequired = true
usernameDiscovery = true
screenshotProtection = false
linkPreviews = true

[features]
fileSharing = true
maxFileSizeMb = 2048
stickers = true
gifs = true
bots = true
polls = true
stories = true
markdown = true
codeBlocks = true
search = true
"#;

const SKIN_EXTENSION: &str = r##"
id = "telegram"

[colors]
bubbleOutgoing = "#EEFFDE"
bubbleIncoming = "#FFFFFF"
chatBackground = "#99BA92"

[darkColors]
bubbleOutgoing = "#766AC8"
bubbleIncoming = "#212121"
chatBackground = "#0F0F0F"

[shadows]
bubble = "0 1px 2px rgba(16, 35, 47, 0.15)"
"##;

const BEHAVIOR_EXTENSION: &str = r#"
id = "telegram"

[features]
secretChats = true
savedMessages = true
topics = true

[limits]
maxFolders = 10
maxBotCommands = 100
"#;

pub(super) const PLATFORM: Platform = Platform {
    id: "telegram",
    name: "Telegram",
    description: "Telegram visuals with Telegram cloud chat behavior",
    skin: SKIN,
    behavior: BEHAVIOR,
    skin_extension: SKIN_EXTENSION,
    behavior_extension: BEHAVIOR_EXTENSION,
};
