// ---------------------------------------------------------------------------
// Discord: blurple servers, categories, roles and rich presence.
// ---------------------------------------------------------------------------

use super::Platform;

const SKIN: &str = r##"
id = "discord"
name = "Discord"
description = "Blurple accents, cozy message groups, server rail"
version = "1.0.0"

[colors]
primary = "#5865F2"
secondary = "#4E5058"
accent = "#EB459E"
background = "#FFFFFF"
surface = "#F2F3F5"
text = "#313338"
textSecondary = "#4E5058"
muted = "#80848E"
border = "#E3E5E8"
success = "#248046"
warning = "#F0B232"
error = "#DA373C"
info = "#5865F2"
buttonPrimaryBg = "#5865F2"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#6D6F78"
buttonSecondaryText = "#FFFFFF"

[darkMode.colors]
primary = "#5865F2"
secondary = "#B5BAC1"
accent = "#EB459E"
background = "#313338"
surface = "#2B2D31"
text = "#DBDEE1"
textSecondary = "#B5BAC1"
muted = "#949BA4"
border = "#3F4147"
success = "#23A55A"
warning = "#F0B232"
error = "#F23F43"
info = "#5865F2"
buttonPrimaryBg = "#5865F2"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#4E5058"
buttonSecondaryText = "#FFFFFF"

[typography]
fontFamily = "gg sans, Noto Sans, Helvetica Neue, Helvetica, Arial, sans-serif"
fontFamilyMono = "gg mono, Consolas, Andale Mono WT, monospace"
fontSizeSm = "14px"
fontSizeBase = "16px"
fontSizeLg = "20px"
fontSizeXl = "24px"
fontWeightNormal = 400
fontWeightMedium = 500
fontWeightBold = 700
lineHeight = 1.375
letterSpacing = "0"

[spacing]
messagePadding = "16px"
messageGap = "17px"
sidebarWidth = "240px"
headerHeight = "48px"
inputHeight = "44px"
avatarSizeSm = "24px"
avatarSizeMd = "40px"
avatarSizeLg = "80px"

[borderRadius]
none = "0px"
sm = "3px"
md = "4px"
lg = "8px"
xl = "16px"
full = "9999px"

[icons]
style = "filled"
set = "discord"
strokeWidth = 2.0

[components]
messageLayout = "cozy"
avatarShape = "circle"
buttonStyle = "filled"
inputStyle = "filled"
sidebarStyle = "full"
headerStyle = "solid"
scrollbarStyle = "thin"
"##;

const BEHAVIOR: &str = r#"
id = "discord"
name = "Discord"
description = "Unlimited edits, side threads, server categories and roles"

[messaging]
editWindow = 0
deleteWindow = 0
deleteForEveryone = true
maxMessageLength = 2000
reactions = true
maxReactionsPerMessage = 20
threadingModel = "thread"
readReceipts = false
typingIndicators = true
forwarding = true
pinning = true
maxPinnedMessages = 50
scheduledMessages = false
voiceMessages = true
disappearingMessages = false

[channels]
directMessages = true
groupChats = true
publicChannels = true
privateChannels = true
broadcastChannels = true
maxGroupSize = 10
hierarchy = "categories"

[presence]
showOnlineStatus = true
showLastSeen = false
customStatus = true
states = ["online", "away", "busy", "invisible", "offline"]
idleTimeout = 600000

[calls]
voiceCalls = true
videoCalls = true
groupCalls = true
maxParticipants = 25
screenSharing = true
recording = false

[notifications]
defaultLevel = "mentions"
mentionEveryone = true
keywordAlerts = false
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
endToEndEncryption = "none"
phoneNumberRequired = false
usernameDiscovery = true
screenshotProtection = false
linkPreviews = true

[features]
fileSharing = true
maxFileSizeMb = 25
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
id = "discord"

[colors]
blurple = "#5865F2"
serverRail = "#E3E5E8"
mentionHighlight = "#FEF8E7"

[darkColors]
serverRail = "#1E1F22"
mentionHighlight = "#49443C"

[shadows]
elevationLow = "0 1px 0 rgba(4, 4, 5, 0.2), 0 1.5px 0 rgba(6, 6, 7, 0.05), 0 2px 0 rgba(4, 4, 5, 0.05)"
"##;

const BEHAVIOR_EXTENSION: &str = r#"
id = "discord"

[features]
voiceChannels = true
stageChannels = true
forumChannels = true

[limits]
maxRoles = 250
maxChannels = 500
"#;

pub(super) const PLATFORM: Platform = Platform {
    id: "discord",
    name: "Discord",
    description: "Discord visuals with Discord server behavior",
    skin: SKIN,
    behavior: BEHAVIOR,
    skin_extension: SKIN_EXTENSION,
    behavior_extension: BEHAVIOR_EXTENSION,
};
