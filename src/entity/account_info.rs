#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub connected: bool,
    pub address: Option<String>,
    pub balance_sol: Option<f64>,
}

impl AccountInfo {
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            address: None,
            balance_sol: None,
        }
    }
}
