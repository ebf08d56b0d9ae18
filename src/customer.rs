use crate::ledger::CustomerId;

/// A bank customer.
///
/// Nothing is validated: any string is accepted as a name, tax id or email.
/// Two customers with identical fields are still different customers; only the
/// `id` identifies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    tax_id: String,
    email: String,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        tax_id: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tax_id: tax_id.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn set_tax_id(&mut self, tax_id: impl Into<String>) {
        self.tax_id = tax_id.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }
}
