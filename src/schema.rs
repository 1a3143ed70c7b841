//! Invoicing schema knowledge
//!
//! The schema description handed to the model as grounding, plus the fixed
//! DDL and documentation corpus the offline trainer seeds into the example
//! store. All of it is hand-maintained; there is no schema introspection.

/// Render the system prompt describing the invoicing schema.
///
/// Built once at startup. The display currency comes from configuration and
/// is the only variable part.
pub fn schema_context(currency: &str) -> String {
    format!(
        r#"You are a SQL expert. Generate PostgreSQL queries based on this schema:

Tables:
- Vendor (id, name, email, phone, address)
- Customer (id, name, email, phone, address)
- Invoice (id, invoiceNumber, vendorId, customerId, invoiceDate, dueDate, totalAmount, status, category)
- LineItem (id, invoiceId, description, quantity, unitPrice, amount, category)
- Payment (id, invoiceId, paymentDate, amount, paymentMethod, reference)

Relationships:
- Invoice.vendorId -> Vendor.id
- Invoice.customerId -> Customer.id
- LineItem.invoiceId -> Invoice.id
- Payment.invoiceId -> Invoice.id

Rules:
- Use double quotes for table/column names with capitals: "Invoice", "totalAmount"
- Status values: 'paid', 'pending', 'overdue', 'partial'
- Amounts are in {currency}
- Always return valid PostgreSQL SELECT queries
- For date ranges, use CURRENT_DATE and INTERVAL
"#
    )
}

/// DDL for the five invoicing tables, as registered with the example store.
pub const DDL_STATEMENTS: [&str; 5] = [
    r#"CREATE TABLE Vendor (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    address TEXT
);"#,
    r#"CREATE TABLE Customer (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    address TEXT
);"#,
    r#"CREATE TABLE Invoice (
    id TEXT PRIMARY KEY,
    invoiceNumber TEXT UNIQUE NOT NULL,
    vendorId TEXT NOT NULL REFERENCES Vendor(id),
    customerId TEXT REFERENCES Customer(id),
    invoiceDate TIMESTAMP NOT NULL,
    dueDate TIMESTAMP,
    totalAmount FLOAT NOT NULL,
    status TEXT DEFAULT 'pending',
    category TEXT,
    description TEXT
);"#,
    r#"CREATE TABLE LineItem (
    id TEXT PRIMARY KEY,
    invoiceId TEXT NOT NULL REFERENCES Invoice(id),
    description TEXT NOT NULL,
    quantity FLOAT NOT NULL,
    unitPrice FLOAT NOT NULL,
    amount FLOAT NOT NULL,
    category TEXT
);"#,
    r#"CREATE TABLE Payment (
    id TEXT PRIMARY KEY,
    invoiceId TEXT NOT NULL REFERENCES Invoice(id),
    paymentDate TIMESTAMP NOT NULL,
    amount FLOAT NOT NULL,
    paymentMethod TEXT,
    reference TEXT
);"#,
];

/// Business documentation the trainer registers alongside the DDL.
pub const DOCUMENTATION: [&str; 9] = [
    "The Invoice table contains all invoice records with vendor and customer information.",
    "Total spend can be calculated by summing totalAmount from the Invoice table.",
    "To find top vendors, group by vendorId and sum totalAmount.",
    "Invoice status can be: paid, pending, overdue, or partial.",
    "Line items are individual products or services within an invoice.",
    "Payments track all payments made against invoices.",
    "Categories include: Software, Hardware, Services, Supplies, Utilities, Marketing.",
    "YTD (Year To Date) means from January 1st of the current year until today.",
    "Overdue invoices have dueDate less than current date and status not 'paid'.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_context_lists_all_tables() {
        let ctx = schema_context("EUR");
        for table in ["Vendor", "Customer", "Invoice", "LineItem", "Payment"] {
            assert!(ctx.contains(table), "missing table {table}");
        }
        assert!(ctx.contains("Amounts are in EUR"));
    }

    #[test]
    fn test_schema_context_uses_configured_currency() {
        let ctx = schema_context("USD");
        assert!(ctx.contains("Amounts are in USD"));
        assert!(!ctx.contains("EUR"));
    }

    #[test]
    fn test_training_corpus_covers_every_table() {
        for table in ["Vendor", "Customer", "Invoice", "LineItem", "Payment"] {
            assert!(
                DDL_STATEMENTS
                    .iter()
                    .any(|ddl| ddl.contains(&format!("CREATE TABLE {table}"))),
                "no DDL for {table}"
            );
        }
    }
}
