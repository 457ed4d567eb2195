/// Weekly flows are projected over a year of 52 weeks
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Ratios are displayed as percentages
pub const PERCENT: f64 = 100.0;

/// Marker the analytics feed puts in the APR type of vaults without history
pub const NEW_VAULT_APR_TYPE: &str = "new";
