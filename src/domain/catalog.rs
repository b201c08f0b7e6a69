//! Fixed name tables used by the synthesis passes.

/// Entity name suffixes, in expansion order. The empty suffix is the base entity itself.
pub const ENTITY_VARIATIONS: [&str; 24] = [
    "",
    " - Primary",
    " - Secondary",
    " - Archive",
    " - Draft",
    " - Published",
    " - Active",
    " - Inactive",
    " - Pending",
    " - Approved",
    " - Rejected",
    " - US",
    " - EU",
    " - APAC",
    " - Global",
    " - Regional",
    " - Local",
    " - Legacy",
    " - Modern",
    " - V1",
    " - V2",
    " - V3",
    " - Beta",
    " - Production",
];

/// (name template, category) for padded documents
pub const DOCUMENT_TEMPLATES: [(&str, &str); 12] = [
    ("Compliance Report", "compliance"),
    ("Audit Trail", "compliance"),
    ("Risk Assessment", "compliance"),
    ("Policy Document", "compliance"),
    ("User Manual", "research"),
    ("Technical Specification", "research"),
    ("Analysis Report", "research"),
    ("White Paper", "research"),
    ("Monthly Statement", "reporting"),
    ("Quarterly Review", "reporting"),
    ("Annual Report", "reporting"),
    ("Performance Summary", "reporting"),
];

/// (name template, category) for processes
pub const PROCESS_TEMPLATES: [(&str, &str); 12] = [
    ("Onboarding", "client"),
    ("Account Setup", "investment"),
    ("Trade Execution", "trading"),
    ("Order Processing", "trading"),
    ("Risk Assessment", "compliance"),
    ("Compliance Check", "compliance"),
    ("Performance Calculation", "reporting"),
    ("Report Generation", "reporting"),
    ("Plan Review", "planning"),
    ("Goal Setting", "planning"),
    ("Data Validation", "research"),
    ("Analysis Pipeline", "research"),
];

/// (name template, category) for dashboards
pub const DASHBOARD_TEMPLATES: [(&str, &str); 8] = [
    ("Executive", "investment"),
    ("Operations", "client"),
    ("Trading", "trading"),
    ("Risk", "compliance"),
    ("Performance", "reporting"),
    ("Analytics", "research"),
    ("Planning", "planning"),
    ("Monitoring", "compliance"),
];
