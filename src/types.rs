/// URL scheme types with a well-known default port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    #[default]
    Other,
}

impl SchemeType {
    /// Get the default port for this scheme (0 when there is none)
    pub fn default_port(self) -> u32 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
            Self::Other => 0,
        }
    }
}
