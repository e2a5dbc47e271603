// ---------------------------------------------------------------------------
// WhatsApp: green bubbles, short edit window, end-to-end by default.
// ---------------------------------------------------------------------------

use super::Platform;

const SKIN: &str = r##"
id = "whatsapp"
name = "WhatsApp"
description = "Teal header, green outgoing bubbles, wallpapered chat"
version = "1.0.0"

[colors]
primary = "#008069"
secondary = "#25D366"
accent = "#53BDEB"
background = "#FFFFFF"
surface = "#F0F2F5"
text = "#111B21"
textSecondary = "#667781"
muted = "#8696A0"
border = "#E9EDEF"
success = "#25D366"
warning = "#FFB02E"
error = "#EA0038"
info = "#53BDEB"
buttonPrimaryBg = "#008069"
buttonPrimaryText = "#FFFFFF"
buttonSecondaryBg = "#F0F2F5"
buttonSecondaryText = "#111B21"

[darkMode.colors]
primary = "#00A884"
secondary = "#25D366"
accent = "#53BDEB"
background = "#111B21"
surface = "#202C33"
text = "#E9EDEF"
textSecondary = "#8696A0"
muted = "#667781"
border = "#222D34"
success = "#25D366"
warning = "#FFB02E"
error = "#F15C6D"
info = "#53BDEB"
buttonPrimaryBg = "#00A884"
buttonPrimaryText = "#111B21"
buttonSecondaryBg = "#202C33"
buttonSecondaryText = "#E9EDEF"

[typography]
fontFamily = "Segoe UI, Helvetica Neue, Helvetica, Lucida Grande, Arial, sans-serif"
fontFamilyMono = "SFMono-Regular, Menlo, monospace"
fontSizeSm = "13px"
fontSizeBase = "14px"
fontSizeLg = "16px"
fontSizeXl = "19px"
fontWeightNormal = 400
fontWeightMedium = 500
fontWeightBold = 600
lineHeight = 1.45
letterSpacing = "0"

[spacing]
messagePadding = "8px"
messageGap = "2px"
sidebarWidth = "400px"
headerHeight = "59px"
inputHeight = "42px"
avatarSizeSm = "28px"
avatarSizeMd = "40px"
avatarSizeLg = "49px"

[borderRadius]
none = "0px"
sm = "3px"
md = "6px"
lg = "7.5px"
xl = "12px"
full = "9999px"

[icons]
style = "outline"
set = "whatsapp"
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
id = "whatsapp"
name = "WhatsApp"
description = "15 minute edits, one reaction per message, quoted replies"

[messaging]
editWindow = 900000
deleteWindow = 172800000
deleteForEveryone = true
maxMessageLength = 65536
reactions = true
maxReactionsPerMessage = 1
threadingModel = "reply"
readReceipts = true
typingIndicators = true
forwarding = true
pinning = true
maxPinnedMessages = 3
scheduledMessages = false
voiceMessages = true
disappearingMessages = true

[channels]
directMessages = true
groupChats = true
publicChannels = false
privateChannels = true
broadcastChannels = true
maxGroupSize = 1024
hierarchy = "flat"

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
maxParticipants = 32
screenSharing = true
recording = false

[notifications]
defaultLevel = "all"
mentionEveryone = false
keywordAlerts = false
doNotDisturb = false
badgeStyle = "count"

[moderation]
roles = false
slowMode = false
maxSlowModeInterval = 0
automod = false
reportMessages = true
banUsers = true

[privacy]
endToEndEncryption = "always"
phoneNumberRequired = true
usernameDiscovery = false
screenshotProtection = false
linkPreviews = true

[features]
fileSharing = true
maxFileSizeMb = 2048
stickers = true
gifs = true
bots = false
polls = true
stories = true
markdown = true
codeBlocks = true
search = true
"#;

const SKIN_EXTENSION: &str = r##"
id = "whatsapp"

[colors]
bubbleOutgoing = "#D9FDD3"
bubbleIncoming = "#FFFFFF"
chatBackground = "#EFEAE2"
checkmarkRead = "#53BDEB"

[darkColors]
bubbleOutgoing = "#005C4B"
bubbleIncoming = "#202C33"
chatBackground = "#0B141A"

[shadows]
bubble = "0 1px 0.5px rgba(11, 20, 26, 0.13)"
"##;

const BEHAVIOR_EXTENSION: &str = r#"
id = "whatsapp"

[features]
communities = true
viewOnceMedia = true

[limits]
maxBroadcastRecipients = 256
maxCommunityGroups = 100
"#;

pub(super) const PLATFORM: Platform = Platform {
    id: "whatsapp",
    name: "WhatsApp",
    description: "WhatsApp visuals with WhatsApp messaging rules",
    skin: SKIN,
    behavior: BEHAVIOR,
    skin_extension: SKIN_EXTENSION,
    behavior_extension: BEHAVIOR_EXTENSION,
};
