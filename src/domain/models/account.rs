/// Persisted account as returned by the account store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Candidate account built from a validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}
