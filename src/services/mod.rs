pub mod add_account;
