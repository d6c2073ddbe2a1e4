pub mod commands {
    pub const LIST: &str = "GIST101";
    pub const CAT: &str = "GIST102";
    pub const DUMP_FILES: &str = "GIST110";
    pub const GREP: &str = "GIST120";
    pub const CREATE_PUBLIC: &str = "GIST201";
    pub const CREATE_PRIVATE: &str = "GIST202";
    pub const GENERIC: &str = "GIST000";
}
