//! Fixture catalog: every hard-coded data set the screens present.
//!
//! Nothing here is fetched or written back. Tables of plain display data are
//! `const` slices; documents are built on demand because sessions can add
//! their own.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::bank::{ApplicationTone, Bank, BankApplication, Membership};
use crate::document::{Document, VerificationStatus};
use crate::error::CoreError;
use crate::screen::Screen;
use crate::types::{BankId, DocumentId};

// ─────────────────────────────────────────────────────────────────────────────
// Languages
// ─────────────────────────────────────────────────────────────────────────────

/// Interface languages with FAQ translations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Hi,
    Tl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Tl];

    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Tl => "tl",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi (हिंदी)",
            Language::Tl => "Tagalog",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Banks
// ─────────────────────────────────────────────────────────────────────────────

pub const BANKS: [Bank; 8] = [
    Bank { id: BankId("enbd"), name: "Emirates NBD", country: "🇦🇪", logo: "🏦", membership: Some(Membership::Existing) },
    Bank { id: BankId("adcb"), name: "Abu Dhabi Commercial Bank", country: "🇦🇪", logo: "🏛️", membership: Some(Membership::Existing) },
    Bank { id: BankId("hsbc"), name: "HSBC UAE", country: "🇦🇪", logo: "🏦", membership: Some(Membership::Preparing) },
    Bank { id: BankId("fab"), name: "First Abu Dhabi Bank", country: "🇦🇪", logo: "🏢", membership: None },
    Bank { id: BankId("rakbank"), name: "RAK Bank", country: "🇦🇪", logo: "🏦", membership: None },
    Bank { id: BankId("sabb"), name: "SABB Bank", country: "🇸🇦", logo: "🏛️", membership: None },
    Bank { id: BankId("alrajhi"), name: "Al Rajhi Bank", country: "🇸🇦", logo: "🏦", membership: None },
    Bank { id: BankId("nbk"), name: "National Bank of Kuwait", country: "🇰🇼", logo: "🏢", membership: None },
];

/// Documents every bank asks for.
pub const COMMON_DOCUMENTS: [&str; 3] = ["Passport", "National ID", "Proof of Address"];

const BANK_REQUIREMENTS: [(&str, &[&str]); 8] = [
    ("enbd", &["Employment Certificate", "Salary Certificate", "Student ID (if student)", "University Letter (if student)"]),
    ("adcb", &["Bank Statement (6 months)", "Student ID (if student)", "Enrollment Letter (if student)"]),
    ("hsbc", &["Visa Document", "Salary Proof", "Tax ID", "Student Status Letter (if student)", "Scholarship Letter (if applicable)"]),
    ("fab", &["Employment Letter", "Bank Statement (3 months)", "Trade License Copy", "Salary Transfer Letter", "University Enrollment (if student)", "Parent/Guardian Consent (if student under 21)"]),
    ("rakbank", &["Salary Certificate", "Employment Contract", "Bank Statement (6 months)", "Company Letter", "Student ID Card (if student)", "University Letter (if student)", "Parent Income Proof (if student)"]),
    ("sabb", &["Residence Proof", "Employment Letter", "Salary Slip (3 months)", "IBAN Certificate", "Tax Registration", "University ID (if student)", "Enrollment Certificate (if student)", "Guardian Details (if student)"]),
    ("alrajhi", &["Salary Certificate", "Employer Letter", "Saudi ID/Iqama", "Utility Bill", "HR Letter", "Student ID (if student)", "University Letter (if student)", "Family Book (if Saudi student)"]),
    ("nbk", &["Bank Reference Letter", "Salary Transfer Document", "Civil ID", "Employment Contract", "Company Stamp Letter", "Student Card (if student)", "University Certificate (if student)", "Parent Signature (if student under 21)"]),
];

pub const APPLICATIONS: [BankApplication; 3] = [
    BankApplication {
        bank: BankId("enbd"),
        status: "In Review",
        submitted: &["Passport", "National ID", "Proof of Address", "Employment Certificate"],
        remaining: &["Salary Certificate"],
        last_update: "Received by bank - 2 days ago",
        tone: ApplicationTone::Yellow,
    },
    BankApplication {
        bank: BankId("adcb"),
        status: "Approved",
        submitted: &["Passport", "National ID", "Proof of Address", "Bank Statement (6 months)", "Student ID (if student)", "Enrollment Letter (if student)"],
        remaining: &[],
        last_update: "Account opened successfully - 5 days ago",
        tone: ApplicationTone::Green,
    },
    BankApplication {
        bank: BankId("hsbc"),
        status: "Preparing",
        submitted: &["Passport", "Visa Document"],
        remaining: &["National ID", "Proof of Address", "Salary Proof", "Tax ID"],
        last_update: "Draft saved - 1 day ago",
        tone: ApplicationTone::Blue,
    },
];

/// Look up a bank by its tag.
pub fn bank(id: &str) -> Option<&'static Bank> {
    BANKS.iter().find(|b| b.id.as_str() == id)
}

/// Parse a bank tag into its id.
pub fn bank_id(id: &str) -> Result<BankId, CoreError> {
    bank(id)
        .map(|b| b.id)
        .ok_or_else(|| CoreError::UnknownBank(id.to_string()))
}

/// Bank-specific requirements (excluding the common documents).
pub fn bank_requirements(id: BankId) -> &'static [&'static str] {
    BANK_REQUIREMENTS
        .iter()
        .find(|(bank, _)| *bank == id.as_str())
        .map(|(_, docs)| *docs)
        .unwrap_or(&[])
}

/// The user's application with a bank, if any.
pub fn application(id: BankId) -> Option<&'static BankApplication> {
    APPLICATIONS.iter().find(|app| app.bank == id)
}

// ─────────────────────────────────────────────────────────────────────────────
// Identity wallet
// ─────────────────────────────────────────────────────────────────────────────

/// A wallet category with its documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub documents: Vec<Document>,
}

const WALLET_CATEGORIES: [(&str, &str, &str); 6] = [
    ("identification", "Identification Documents", "🪪"),
    ("residence", "Residence & Address", "🏠"),
    ("employment", "Employment Documents", "💼"),
    ("financial", "Financial Documents", "💰"),
    ("education", "Education & Certificates", "🎓"),
    ("personal", "Personal Records", "👤"),
];

// (id, category, name, issuer, expiry, icon)
const WALLET_DOCUMENTS: [(u32, &str, &str, &str, Option<&str>, &str); 16] = [
    (1, "identification", "Passport", "Government of Philippines", Some("2030-03-15"), "🛂"),
    (2, "identification", "National ID", "UAE Ministry of Interior", Some("2031-01-10"), "🪪"),
    (3, "identification", "Driver License", "UAE RTA", Some("2028-06-20"), "🚗"),
    (4, "residence", "Visa Document", "UAE Immigration", Some("2026-10-25"), "✈️"),
    (5, "residence", "Proof of Address", "DEWA Utility", None, "🏠"),
    (6, "residence", "Tenancy Contract", "Ejari", Some("2025-12-31"), "📄"),
    (7, "employment", "Employment Certificate", "Emirates Tech Solutions", None, "💼"),
    (8, "employment", "Salary Certificate", "Emirates Tech Solutions", None, "💰"),
    (9, "employment", "Offer Letter", "Emirates Tech Solutions", None, "📨"),
    (10, "financial", "Bank Statement", "Emirates NBD", None, "🏦"),
    (11, "financial", "Tax ID", "Federal Tax Authority", None, "📋"),
    (12, "financial", "Salary Slip", "Emirates Tech Solutions", None, "💵"),
    (13, "education", "Degree Certificate", "University of Manila", None, "🎓"),
    (14, "education", "Transcript", "University of Manila", None, "📚"),
    (15, "personal", "Birth Certificate", "PSA Philippines", None, "👶"),
    (16, "personal", "Marriage Certificate", "NSO Philippines", None, "💍"),
];

/// Number of fixture wallet documents; session documents are numbered after.
pub const WALLET_DOCUMENT_COUNT: u32 = WALLET_DOCUMENTS.len() as u32;

/// Wallet categories with their fixture documents, in display order.
pub fn wallet_categories() -> Vec<WalletCategory> {
    WALLET_CATEGORIES
        .iter()
        .map(|&(key, label, icon)| WalletCategory {
            key,
            label,
            icon,
            documents: WALLET_DOCUMENTS
                .iter()
                .filter(|row| row.1 == key)
                .map(|&(id, category, name, issuer, expiry, icon)| Document {
                    id: DocumentId(id),
                    name: name.to_string(),
                    category: category.to_string(),
                    status: VerificationStatus::Verified,
                    issuer: issuer.to_string(),
                    expiry: expiry.map(String::from),
                    icon: icon.to_string(),
                    source: None,
                })
                .collect(),
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Document checklist
// ─────────────────────────────────────────────────────────────────────────────

/// Residency profile selecting a checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Residency {
    Resident,
    #[default]
    NonResident,
}

impl Residency {
    pub const fn label(self) -> &'static str {
        match self {
            Residency::Resident => "Resident",
            Residency::NonResident => "Non-Resident",
        }
    }
}

impl FromStr for Residency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resident" => Ok(Residency::Resident),
            "nonResident" | "non_resident" => Ok(Residency::NonResident),
            other => Err(CoreError::UnknownProfile(other.to_string())),
        }
    }
}

/// One checklist line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub name: &'static str,
    pub status: VerificationStatus,
    pub icon: &'static str,
}

const fn item(id: u32, name: &'static str, status: VerificationStatus, icon: &'static str) -> ChecklistItem {
    ChecklistItem { id, name, status, icon }
}

const RESIDENT_MANDATORY: [ChecklistItem; 3] = [
    item(1, "National ID", VerificationStatus::Verified, "🪪"),
    item(2, "Proof of Address", VerificationStatus::Pending, "🏠"),
    item(3, "Passport", VerificationStatus::Verified, "🛂"),
];

const RESIDENT_OPTIONAL: [ChecklistItem; 2] = [
    item(4, "Driver's License", VerificationStatus::NotStarted, "🚗"),
    item(5, "Utility Bill", VerificationStatus::NotStarted, "💡"),
];

const NON_RESIDENT_MANDATORY: [ChecklistItem; 6] = [
    item(1, "Passport", VerificationStatus::Verified, "🛂"),
    item(2, "Visa Document", VerificationStatus::Rejected, "✈️"),
    item(3, "Employment Certificate", VerificationStatus::NotStarted, "💼"),
    item(4, "Salary Proof", VerificationStatus::NotStarted, "💰"),
    item(5, "Tax ID", VerificationStatus::NotStarted, "📋"),
    item(6, "Proof of Address", VerificationStatus::Pending, "🏠"),
];

const NON_RESIDENT_OPTIONAL: [ChecklistItem; 2] = [
    item(7, "Bank Statement", VerificationStatus::NotStarted, "🏦"),
    item(8, "Reference Letter", VerificationStatus::NotStarted, "📨"),
];

/// Mandatory and optional checklist items for a profile.
pub fn checklist(profile: Residency) -> (&'static [ChecklistItem], &'static [ChecklistItem]) {
    match profile {
        Residency::Resident => (&RESIDENT_MANDATORY, &RESIDENT_OPTIONAL),
        Residency::NonResident => (&NON_RESIDENT_MANDATORY, &NON_RESIDENT_OPTIONAL),
    }
}

/// A country selectable on the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub flag: &'static str,
    pub name: &'static str,
}

pub const COUNTRIES: [Country; 10] = [
    Country { code: "ae", flag: "🇦🇪", name: "UAE" },
    Country { code: "sa", flag: "🇸🇦", name: "Saudi Arabia" },
    Country { code: "kw", flag: "🇰🇼", name: "Kuwait" },
    Country { code: "bh", flag: "🇧🇭", name: "Bahrain" },
    Country { code: "om", flag: "🇴🇲", name: "Oman" },
    Country { code: "qa", flag: "🇶🇦", name: "Qatar" },
    Country { code: "ph", flag: "🇵🇭", name: "Philippines" },
    Country { code: "in", flag: "🇮🇳", name: "India" },
    Country { code: "us", flag: "🇺🇸", name: "USA" },
    Country { code: "uk", flag: "🇬🇧", name: "UK" },
];

pub fn country(code: &str) -> Result<&'static Country, CoreError> {
    COUNTRIES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| CoreError::UnknownCountry(code.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Help & support
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn faq(question: &'static str, answer: &'static str) -> FaqEntry {
    FaqEntry { question, answer }
}

const FAQ_EN: [FaqEntry; 8] = [
    faq("How do I upload a document?", "Navigate to the Upload tab, select your document type, then either take a photo or choose a file from your device. Our AI will automatically validate your document."),
    faq("Why was my document rejected?", "Documents may be rejected due to poor image quality, missing information, expiry, or authentication issues. Check the validation results for specific reasons and re-upload a clear image."),
    faq("How long does verification take?", "Most documents are verified within 2-3 business days. Some documents may require manual review and can take up to 5 business days."),
    faq("Is my data secure?", "Yes! All documents are encrypted using AES-256 encryption. We use zero-knowledge proofs and never share your data without your explicit permission."),
    faq("Can I share my credentials with multiple banks?", "Absolutely! Once verified, you can share your credentials with any bank or fintech. You maintain full control and can revoke access anytime."),
    faq("What documents do non-residents need?", "Non-residents typically need: passport, visa, employment certificate, salary proof, tax ID, and proof of address. Requirements may vary by country."),
    faq("How do I delete my account?", "Go to Security & Privacy > Privacy Controls > Delete Account. This will permanently delete all your data and cannot be undone."),
    faq("What file formats are supported?", "We support JPG, PNG, and PDF files. For best results, use clear, high-resolution images where all text is readable."),
];

const FAQ_HI: [FaqEntry; 3] = [
    faq("मैं दस्तावेज़ कैसे अपलोड करूं?", "अपलोड टैब पर जाएं, अपना दस्तावेज़ प्रकार चुनें, फिर या तो फोटो लें या अपने डिवाइस से फ़ाइल चुनें। हमारा AI स्वचालित रूप से आपके दस्तावेज़ को मान्य करेगा।"),
    faq("मेरा दस्तावेज़ क्यों अस्वीकार किया गया?", "खराब छवि गुणवत्ता, जानकारी गायब होने, समाप्ति, या प्रमाणीकरण समस्याओं के कारण दस्तावेज़ अस्वीकार किए जा सकते हैं।"),
    faq("सत्यापन में कितना समय लगता है?", "अधिकांश दस्तावेज़ 2-3 कार्य दिवसों के भीतर सत्यापित हो जाते हैं।"),
];

const FAQ_TL: [FaqEntry; 3] = [
    faq("Paano mag-upload ng dokumento?", "Pumunta sa Upload tab, piliin ang uri ng dokumento, pagkatapos ay kumuha ng larawan o pumili ng file mula sa iyong device. Awtomatikong babalidahin ng aming AI ang iyong dokumento."),
    faq("Bakit tinanggihan ang aking dokumento?", "Maaaring tanggihan ang mga dokumento dahil sa masamang kalidad ng larawan, nawawalang impormasyon, pag-expire, o mga isyu sa pagpapatunay."),
    faq("Gaano katagal ang verification?", "Karamihan ng mga dokumento ay nabeberipika sa loob ng 2-3 araw ng negosyo."),
];

/// FAQ entries for a language.
pub fn faqs(language: Language) -> &'static [FaqEntry] {
    match language {
        Language::En => &FAQ_EN,
        Language::Hi => &FAQ_HI,
        Language::Tl => &FAQ_TL,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UploadTip {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const UPLOAD_TIPS: [UploadTip; 4] = [
    UploadTip { title: "Good Lighting", description: "Take photos in well-lit areas. Avoid shadows and glare.", icon: "💡" },
    UploadTip { title: "Clear Focus", description: "Ensure all text is sharp and readable. Avoid blurry images.", icon: "📸" },
    UploadTip { title: "Full Document", description: "Capture all four corners. Don't cut off any part.", icon: "🖼️" },
    UploadTip { title: "Flat Surface", description: "Place document on a flat surface to avoid distortion.", icon: "📄" },
];

/// Short capture hints shown under the upload area.
pub const CAPTURE_HINTS: [&str; 4] = [
    "Ensure the document is clearly visible and not blurry",
    "Capture all four corners of the document",
    "Use good lighting and avoid shadows or glare",
    "Make sure text is readable and information is not cut off",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub label: &'static str,
    pub detail: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { label: "Live Chat", detail: "Available 24/7" },
    ContactChannel { label: "Email Support", detail: "support@nour.id" },
    ContactChannel { label: "Phone Support", detail: "+971 800 NOUR" },
];

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub title: &'static str,
    pub status: &'static str,
    pub tone: ApplicationTone,
}

pub const NOTIFICATIONS: [Notification; 2] = [
    Notification { id: 1, title: "Emirates NBD Application", status: "In Review", tone: ApplicationTone::Yellow },
    Notification { id: 2, title: "ADCB Account Opening", status: "Approved", tone: ApplicationTone::Green },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    pub id: u32,
    pub task: &'static str,
    pub priority: Priority,
    pub icon: &'static str,
    /// Screen the to-do opens.
    pub target: Screen,
}

pub const TODO_ITEMS: [TodoItem; 3] = [
    TodoItem { id: 1, task: "Upload Salary Certificate for HSBC", priority: Priority::High, icon: "💰", target: Screen::Upload },
    TodoItem { id: 2, task: "Update Address Proof (Expires in 15 days)", priority: Priority::Medium, icon: "🏠", target: Screen::Upload },
    TodoItem { id: 3, task: "Complete Emirates NBD verification", priority: Priority::High, icon: "🏦", target: Screen::EnbdIntegration },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub target: Screen,
    pub label: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 6] = [
    QuickAction { target: Screen::Upload, label: "Upload Document" },
    QuickAction { target: Screen::Share, label: "Share Identity" },
    QuickAction { target: Screen::Wallet, label: "My Wallet" },
    QuickAction { target: Screen::Checklist, label: "Checklist" },
    QuickAction { target: Screen::Progress, label: "Track Progress" },
    QuickAction { target: Screen::Security, label: "Security" },
];

// ─────────────────────────────────────────────────────────────────────────────
// Progress tracking
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub date: &'static str,
    pub time: &'static str,
    pub event: &'static str,
    pub status: VerificationStatus,
    pub description: &'static str,
}

pub const TIMELINE: [TimelineEvent; 5] = [
    TimelineEvent { date: "2025-11-09", time: "10:30 AM", event: "Proof of Address uploaded", status: VerificationStatus::Pending, description: "Document is under review by verification team" },
    TimelineEvent { date: "2025-11-08", time: "2:15 PM", event: "Visa Document rejected", status: VerificationStatus::Rejected, description: "Document image quality too low. Please re-upload." },
    TimelineEvent { date: "2025-11-05", time: "11:20 AM", event: "National ID verified", status: VerificationStatus::Verified, description: "Successfully verified by AI validation system" },
    TimelineEvent { date: "2025-10-28", time: "3:45 PM", event: "Passport verified", status: VerificationStatus::Verified, description: "Successfully verified by AI validation system" },
    TimelineEvent { date: "2025-10-25", time: "9:00 AM", event: "Account created", status: VerificationStatus::Verified, description: "Welcome to nour digital identity platform" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
}

pub const ALERTS: [Alert; 3] = [
    Alert { kind: AlertKind::Warning, title: "Action Required", message: "Your Visa Document was rejected. Please re-upload a clearer image.", time: "2 hours ago" },
    Alert { kind: AlertKind::Info, title: "Document Expiring Soon", message: "Your National ID will expire in 90 days. Consider uploading a renewed version.", time: "1 day ago" },
    Alert { kind: AlertKind::Success, title: "Verification Complete", message: "Your National ID has been successfully verified.", time: "4 days ago" },
];

// ─────────────────────────────────────────────────────────────────────────────
// Security & privacy, account settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub active: bool,
}

pub const SECURITY_FEATURES: [SecurityFeature; 4] = [
    SecurityFeature { title: "End-to-End Encryption", description: "All your documents are encrypted using AES-256 before storage", active: true },
    SecurityFeature { title: "Zero-Knowledge Proofs", description: "Verify credentials without revealing actual data", active: true },
    SecurityFeature { title: "Secure Cloud Storage", description: "Documents stored in encrypted, geo-redundant servers", active: true },
    SecurityFeature { title: "Multi-Factor Authentication", description: "Extra layer of security for account access", active: true },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrivacyControl {
    pub title: &'static str,
    pub description: &'static str,
    pub count: Option<u32>,
    pub action: &'static str,
    pub danger: bool,
}

pub const PRIVACY_CONTROLS: [PrivacyControl; 4] = [
    PrivacyControl { title: "Shared Credentials", description: "Manage who can access your verified credentials", count: Some(2), action: "Manage Access", danger: false },
    PrivacyControl { title: "Data Export", description: "Download all your data in a portable format", count: None, action: "Export Data", danger: false },
    PrivacyControl { title: "Revoke Permissions", description: "Remove access from banks and fintechs", count: None, action: "Manage", danger: false },
    PrivacyControl { title: "Delete Account", description: "Permanently delete your account and all data", count: None, action: "Delete", danger: true },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub language: &'static str,
    pub country: &'static str,
    pub member_since: &'static str,
}

pub const ACCOUNT: AccountInfo = AccountInfo {
    name: "Alexandra Rivera",
    email: "alexandra.rivera@email.com",
    phone: "+971 50 123 4567",
    language: "English",
    country: "United Arab Emirates",
    member_since: "October 2024",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingAction {
    Edit,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsItem {
    pub label: &'static str,
    pub value: &'static str,
    pub action: SettingAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettingsSection {
    pub title: &'static str,
    pub items: &'static [SettingsItem],
}

pub const SETTINGS_SECTIONS: [SettingsSection; 2] = [
    SettingsSection {
        title: "Account Information",
        items: &[
            SettingsItem { label: "Full Name", value: ACCOUNT.name, action: SettingAction::Edit },
            SettingsItem { label: "Email Address", value: ACCOUNT.email, action: SettingAction::Edit },
            SettingsItem { label: "Phone Number", value: ACCOUNT.phone, action: SettingAction::Edit },
            SettingsItem { label: "Preferred Language", value: ACCOUNT.language, action: SettingAction::Edit },
        ],
    },
    SettingsSection {
        title: "Security Settings",
        items: &[
            SettingsItem { label: "Change Password", value: "••••••••", action: SettingAction::Edit },
            SettingsItem { label: "Two-Factor Authentication", value: "Enabled", action: SettingAction::Toggle },
            SettingsItem { label: "Wallet PIN", value: "••••", action: SettingAction::Edit },
            SettingsItem { label: "Biometric Login", value: "Face ID", action: SettingAction::Toggle },
        ],
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// ENBD integration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegrationStep {
    pub id: u32,
    pub label: &'static str,
    pub duration_ms: u64,
}

pub const ENBD_STEPS: [IntegrationStep; 5] = [
    IntegrationStep { id: 1, label: "Secure Connection", duration_ms: 1000 },
    IntegrationStep { id: 2, label: "Identity Verification", duration_ms: 1500 },
    IntegrationStep { id: 3, label: "Document Validation", duration_ms: 2000 },
    IntegrationStep { id: 4, label: "Risk Assessment", duration_ms: 1500 },
    IntegrationStep { id: 5, label: "Account Setup", duration_ms: 1000 },
];

// ─────────────────────────────────────────────────────────────────────────────
// Transfers, home, compliance, admin
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    /// Flag for fiat, symbol for digital currencies.
    pub glyph: &'static str,
    pub balance: &'static str,
}

pub const CURRENCIES: [Currency; 5] = [
    Currency { code: "USD", name: "US Dollar", glyph: "🇺🇸", balance: "12,458.00" },
    Currency { code: "AED", name: "UAE Dirham", glyph: "🇦🇪", balance: "8,234.50" },
    Currency { code: "PHP", name: "Philippine Peso", glyph: "🇵🇭", balance: "145,890.00" },
    Currency { code: "USDC", name: "USD Coin", glyph: "◈", balance: "5,000.00" },
    Currency { code: "CBDC", name: "Central Bank Digital Currency", glyph: "◉", balance: "2,500.00" },
];

pub fn currency(code: &str) -> Result<&'static Currency, CoreError> {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| CoreError::UnknownCurrency(code.to_string()))
}

/// Stages of a transfer, in order.
pub const TRANSFER_STAGES: [&str; 4] = ["Verify", "Route", "Execute", "Confirm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceChange {
    pub code: &'static str,
    pub amount: &'static str,
    pub glyph: &'static str,
    pub change: &'static str,
}

pub const HOME_BALANCES: [BalanceChange; 5] = [
    BalanceChange { code: "USD", amount: "12,458.00", glyph: "🇺🇸", change: "+2.4%" },
    BalanceChange { code: "AED", amount: "8,234.50", glyph: "🇦🇪", change: "+1.8%" },
    BalanceChange { code: "PHP", amount: "145,890.00", glyph: "🇵🇭", change: "+0.5%" },
    BalanceChange { code: "USDC", amount: "5,000.00", glyph: "◈", change: "+0.0%" },
    BalanceChange { code: "CBDC", amount: "2,500.00", glyph: "◉", change: "+0.1%" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: u32,
    pub kind: &'static str,
    pub counterparty: &'static str,
    pub amount: &'static str,
    pub time: &'static str,
}

pub const RECENT_TRANSACTIONS: [Transaction; 4] = [
    Transaction { id: 1, kind: "Received", counterparty: "Maria Santos", amount: "+$450.00", time: "2 hours ago" },
    Transaction { id: 2, kind: "Sent", counterparty: "Freelance Payment", amount: "-$1,200.00", time: "5 hours ago" },
    Transaction { id: 3, kind: "Swap", counterparty: "USD → AED", amount: "$500.00", time: "1 day ago" },
    Transaction { id: 4, kind: "Received", counterparty: "Salary Deposit", amount: "+$3,500.00", time: "2 days ago" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HopStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutingHop {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub status: HopStatus,
}

pub const ROUTING_HOPS: [RoutingHop; 4] = [
    RoutingHop { id: 1, name: "User Wallet", role: "origin", status: HopStatus::Completed },
    RoutingHop { id: 2, name: "CBDC Gateway", role: "processing", status: HopStatus::Active },
    RoutingHop { id: 3, name: "VisaNet Bridge", role: "processing", status: HopStatus::Pending },
    RoutingHop { id: 4, name: "BSP Wallet", role: "destination", status: HopStatus::Pending },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceCheck {
    pub name: &'static str,
    pub passed: bool,
    pub time: &'static str,
}

pub const COMPLIANCE_CHECKS: [ComplianceCheck; 5] = [
    ComplianceCheck { name: "KYC Verification", passed: true, time: "0.2s" },
    ComplianceCheck { name: "AML Screening", passed: true, time: "0.4s" },
    ComplianceCheck { name: "Sanctions Check", passed: true, time: "0.3s" },
    ComplianceCheck { name: "Regional Compliance", passed: true, time: "0.5s" },
    ComplianceCheck { name: "Smart Contract Audit", passed: true, time: "0.6s" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyVolume {
    pub month: &'static str,
    pub transactions: u64,
    pub volume: u64,
}

pub const TRANSACTION_SERIES: [MonthlyVolume; 6] = [
    MonthlyVolume { month: "Jan", transactions: 4200, volume: 1_200_000 },
    MonthlyVolume { month: "Feb", transactions: 5100, volume: 1_450_000 },
    MonthlyVolume { month: "Mar", transactions: 4800, volume: 1_380_000 },
    MonthlyVolume { month: "Apr", transactions: 6200, volume: 1_820_000 },
    MonthlyVolume { month: "May", transactions: 7500, volume: 2_150_000 },
    MonthlyVolume { month: "Jun", transactions: 8900, volume: 2_580_000 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorridorStat {
    pub route: &'static str,
    pub transactions: u64,
    pub volume: &'static str,
    pub success: &'static str,
    pub trend: &'static str,
}

pub const CORRIDORS: [CorridorStat; 4] = [
    CorridorStat { route: "UAE → Philippines", transactions: 12450, volume: "$3.2M", success: "99.8%", trend: "+12%" },
    CorridorStat { route: "Philippines → UAE", transactions: 8920, volume: "$2.1M", success: "99.5%", trend: "+8%" },
    CorridorStat { route: "UAE → USA", transactions: 5630, volume: "$1.8M", success: "99.9%", trend: "+15%" },
    CorridorStat { route: "USA → Philippines", transactions: 4210, volume: "$1.2M", success: "99.7%", trend: "+6%" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegrationPartner {
    pub name: &'static str,
    pub active: bool,
    pub connections: u32,
    pub api_calls: &'static str,
}

pub const PARTNERS: [IntegrationPartner; 4] = [
    IntegrationPartner { name: "Emirates NBD", active: true, connections: 1240, api_calls: "156k/mo" },
    IntegrationPartner { name: "HSBC UAE", active: true, connections: 890, api_calls: "98k/mo" },
    IntegrationPartner { name: "BPI Philippines", active: true, connections: 2100, api_calls: "245k/mo" },
    IntegrationPartner { name: "UnionBank PH", active: true, connections: 1560, api_calls: "178k/mo" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_lookup() {
        assert_eq!(bank("hsbc").unwrap().name, "HSBC UAE");
        assert!(bank("citi").is_none());
        assert_eq!(bank_id("nbk").unwrap(), BankId("nbk"));
        assert!(matches!(bank_id("citi"), Err(CoreError::UnknownBank(_))));
    }

    #[test]
    fn test_every_bank_has_requirements() {
        for b in BANKS {
            assert!(!bank_requirements(b.id).is_empty(), "{}", b.id);
        }
    }

    #[test]
    fn test_applications_match_memberships() {
        for app in APPLICATIONS {
            let b = bank(app.bank.as_str()).unwrap();
            assert!(b.membership.is_some(), "{} has an application", b.id);
        }
    }

    #[test]
    fn test_wallet_has_sixteen_verified_documents() {
        let categories = wallet_categories();
        assert_eq!(categories.len(), 6);
        let docs: Vec<_> = categories.iter().flat_map(|c| &c.documents).collect();
        assert_eq!(docs.len() as u32, WALLET_DOCUMENT_COUNT);
        assert!(docs.iter().all(|d| d.is_verified()));
        assert_eq!(categories[0].documents[0].expiry.as_deref(), Some("2030-03-15"));
    }

    #[test]
    fn test_faq_sizes() {
        assert_eq!(faqs(Language::En).len(), 8);
        assert_eq!(faqs(Language::Hi).len(), 3);
        assert_eq!(faqs(Language::Tl).len(), 3);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("tl".parse::<Language>().unwrap(), Language::Tl);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_checklist_profiles() {
        let (mandatory, optional) = checklist(Residency::NonResident);
        assert_eq!(mandatory.len(), 6);
        assert_eq!(optional.len(), 2);
        assert_eq!("resident".parse::<Residency>().unwrap(), Residency::Resident);
        assert_eq!(country("ph").unwrap().name, "Philippines");
    }

    #[test]
    fn test_enbd_durations() {
        let total: u64 = ENBD_STEPS.iter().map(|s| s.duration_ms).sum();
        assert_eq!(total, 7000);
    }

    #[test]
    fn test_todo_targets() {
        let enbd: Vec<u32> = TODO_ITEMS
            .iter()
            .filter(|t| t.target == Screen::EnbdIntegration)
            .map(|t| t.id)
            .collect();
        assert_eq!(enbd, vec![3]);
        assert!(TODO_ITEMS.iter().all(|t| !t.target.is_auth()));
    }
}
