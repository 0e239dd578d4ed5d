//! Quotation commands.

use clap::Args;
use configurator_core::models::QuotationRequest;

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Configuration id or code.
    pub id: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub company_name: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub country_iso: Option<String>,
    #[arg(long)]
    pub remarks: Option<String>,
}

impl QuoteArgs {
    pub fn request(&self) -> QuotationRequest {
        QuotationRequest {
            email: Some(self.email.clone()),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company_name: self.company_name.clone(),
            phone_number: self.phone_number.clone(),
            country_iso: self.country_iso.clone(),
            remarks: self.remarks.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Args)]
pub struct AddToQuotationArgs {
    pub quotation_id: String,
    /// Configurations to add.
    #[arg(required = true)]
    pub configuration_ids: Vec<String>,
}
