// The in-memory default pair the login gate starts with, replaceable through
// the register flow for the lifetime of the tab. No backend, no persistence.
pub const DEFAULT_OPERATOR: &str = "verzz";
pub const DEFAULT_ACCESS_CODE: &str = "pranay123";

pub const TERMINAL_TITLE: &str = "TeamXD Terminal";

pub const CONTACT_EMAILS: [&str; 2] = ["mythreanxd@gmail.com", "knitheesh0360@gmail.com"];
