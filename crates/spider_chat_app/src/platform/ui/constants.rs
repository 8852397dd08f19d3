pub const USER_LABEL: &str = "you>";
pub const ASSISTANT_LABEL: &str = "bot>";
/// Continuation lines of a message line up under its first line.
pub const CONTINUATION_INDENT: &str = "\n     ";

pub const DRAFT_ACTIONS_HINT: &str =
    "     [:url] Add URL   [:desc] Edit Description   [:confirm] Confirm Setup";
/// Shown while the draft still lacks a URL or a description.
pub const DRAFT_EDIT_HINT: &str = "     [:url] Add URL   [:desc] Edit Description";
pub const PROMPT_CANCEL_HINT: &str = "(blank line cancels)";

pub const HELP_TEXT: &str = "\
Type a message and press Enter to chat. End a line with \\ to continue it.
Commands typed as text:
  start spider / edit spider   begin a new spider configuration
  stop spider                  stop the running spider
  update keyword mappings      send new keyword mappings (JSON)
  update spider rules          send new spider rules (JSON)
Controls:
  :start  :stop                start setup / stop the spider
  :url  :desc  :confirm        edit or submit the configuration
  :abandon                     stop waiting on a submitted configuration
  :help  :quit";
