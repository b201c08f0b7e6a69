//! Built-in wealth-management descriptor catalog: 24 base forms × 17 audience variations.

use crate::domain::descriptor::{Descriptor, DescriptorKind};
use crate::domain::ports::DescriptorSource;
use anyhow::Result;

/// (id stem, display name, description, category, entity name)
static BASE_FORMS: [(&str, &str, &str, &str, &str); 24] = [
    // Client Management
    ("client-portfolio", "Client Portfolio Management", "Manage client investment portfolios and holdings", "portfolio", "Portfolio"),
    ("client-profiles", "Client Profile Management", "Client personal and financial information", "client", "Client"),
    ("household-accounts", "Household Accounts", "Family and household account aggregation", "client", "Household"),
    ("beneficiary-management", "Beneficiary Management", "Manage account beneficiaries and designations", "client", "Beneficiary"),
    // Investment & Trading
    ("investment-accounts", "Investment Account Management", "Track investment accounts and positions", "investment", "Account"),
    ("trade-execution", "Trade Execution", "Buy and sell orders for securities", "trading", "Trade"),
    ("asset-allocation", "Asset Allocation", "Portfolio asset class distribution", "investment", "AssetAllocation"),
    ("securities-holdings", "Securities Holdings", "Individual security positions and performance", "investment", "Security"),
    // Financial Planning
    ("financial-plans", "Financial Planning", "Comprehensive client financial plans", "planning", "FinancialPlan"),
    ("retirement-planning", "Retirement Planning", "Retirement income and savings strategies", "planning", "RetirementPlan"),
    ("tax-planning", "Tax Planning", "Tax optimization and strategies", "planning", "TaxPlan"),
    ("estate-planning", "Estate Planning", "Estate and wealth transfer planning", "planning", "EstatePlan"),
    // Performance & Reporting
    ("performance-reports", "Performance Reports", "Investment performance and attribution", "reporting", "PerformanceReport"),
    ("transaction-history", "Transaction History", "Account transaction records and history", "reporting", "Transaction"),
    ("fee-billing", "Fee & Billing", "Advisory fees and billing statements", "reporting", "FeeStatement"),
    ("consolidated-statements", "Consolidated Statements", "Multi-account summary statements", "reporting", "Statement"),
    // Risk & Compliance
    ("risk-assessment", "Risk Assessment", "Client risk tolerance and suitability", "compliance", "RiskProfile"),
    ("compliance-reviews", "Compliance Reviews", "Regulatory compliance and reviews", "compliance", "ComplianceReview"),
    ("aml-kyc", "AML/KYC Documentation", "Anti-money laundering and client verification", "compliance", "KYCDocument"),
    ("regulatory-filings", "Regulatory Filings", "Required regulatory submissions", "compliance", "RegulatoryFiling"),
    // Research & Analysis
    ("market-research", "Market Research", "Investment research and market analysis", "research", "Research"),
    ("portfolio-analysis", "Portfolio Analysis", "Deep portfolio analytics and insights", "research", "Analysis"),
    ("investment-products", "Investment Products", "Available investment vehicles and funds", "research", "Product"),
    ("model-portfolios", "Model Portfolios", "Strategic model portfolio templates", "research", "ModelPortfolio"),
];

/// (id suffix, display label); the first entry is the unsuffixed base form
static AUDIENCE_VARIATIONS: [(&str, &str); 17] = [
    ("", ""),
    ("high-net-worth", "High Net Worth"),
    ("retail", "Retail"),
    ("institutional", "Institutional"),
    ("family-office", "Family Office"),
    ("advisor-managed", "Advisor Managed"),
    ("self-directed", "Self-Directed"),
    ("401k", "401(k)"),
    ("ira", "IRA"),
    ("roth", "Roth"),
    ("traditional", "Traditional"),
    ("taxable", "Taxable"),
    ("trust", "Trust"),
    ("corporate", "Corporate"),
    ("nonprofit", "Non-Profit"),
    ("pension", "Pension"),
    ("sep", "SEP"),
];

/// Categories whose descriptors are documents rather than forms
const DOCUMENT_CATEGORIES: [&str; 3] = ["reporting", "compliance", "research"];

/// Built-in descriptor catalog, optionally truncated to the first `limit` entries
pub struct BuiltinCatalog {
    limit: Option<usize>,
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new(None)
    }
}

impl BuiltinCatalog {
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }

    /// Total size of the untruncated catalog
    pub fn full_len() -> usize {
        BASE_FORMS.len() * AUDIENCE_VARIATIONS.len()
    }

    pub fn descriptors(&self) -> Vec<Descriptor> {
        BASE_FORMS
            .iter()
            .flat_map(|base| AUDIENCE_VARIATIONS.iter().map(move |variation| (base, variation)))
            .take(self.limit.unwrap_or(usize::MAX))
            .map(|(&(stem, name, description, category, entity), &(suffix, label))| {
                let id = if suffix.is_empty() {
                    format!("{}-form", stem)
                } else {
                    format!("{}-{}-form", stem, suffix)
                };
                let name = if label.is_empty() {
                    name.to_string()
                } else {
                    format!("{} - {}", name, label)
                };
                let kind = if DOCUMENT_CATEGORIES.contains(&category) {
                    DescriptorKind::Document
                } else {
                    DescriptorKind::Form
                };
                Descriptor {
                    id,
                    kind,
                    name,
                    description: description.to_string(),
                    category: category.to_string(),
                    entity_name: entity.to_string(),
                }
            })
            .collect()
    }
}

impl DescriptorSource for BuiltinCatalog {
    fn load(&self) -> Result<Vec<Descriptor>> {
        Ok(self.descriptors())
    }
}
