mod user_test_context;
mod vault_test_context;

pub use user_test_context::UserTestContext;
pub use vault_test_context::VaultTestContext;
