//! Client-side form validation.
//!
//! Every form checks its input here before anything is sent, so the rules
//! can be exercised without a browser. Each validator stops at the first
//! failing rule, which is the message the form shows.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{
    Amount, CampaignCategory, CreateCampaignRequest, CreateDonationRequest, CreateExpenseReport,
    CreateIssueRequest, IssueCategory, LoginRequest, RegisterRequest, UserRole,
};

/// Shortest password the login form accepts.
pub const LOGIN_PASSWORD_MIN: usize = 6;
/// Shortest password registration accepts.
pub const PASSWORD_MIN: usize = 8;
/// Longest full name registration accepts.
pub const FULL_NAME_MAX: usize = 50;
/// Exact digit count of a CNIC.
pub const CNIC_DIGITS: usize = 13;
/// Exact digit count of a mobile number.
pub const PHONE_DIGITS: usize = 11;
/// Largest campaign banner upload, in bytes.
pub const MAX_BANNER_BYTES: u64 = 10 * 1024 * 1024;
/// Location used when the reporter leaves the name blank.
pub const DEFAULT_LOCATION: &str = "Narowal";

const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Why a form was rejected. The display text is what the form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {0} characters")]
    LoginPasswordTooShort(usize),
    #[error("Full name cannot exceed {0} characters")]
    FullNameTooLong(usize),
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
    #[error("Password must contain at least one number")]
    PasswordNeedsDigit,
    #[error("Password must contain at least one symbol (!@#$%^&* etc.)")]
    PasswordNeedsSymbol,
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
    #[error("CNIC must be exactly 13 digits")]
    InvalidCnic,
    #[error("Phone number must be exactly 11 digits")]
    InvalidPhone,
    #[error("Organization name is required for NGO accounts")]
    OrganizationRequired,
    #[error("Please fill in all required fields and pin the location.")]
    IncompleteReport,
    #[error("Please upload a campaign banner image.")]
    BannerRequired,
    #[error("Image size must be less than 10MB")]
    BannerTooLarge,
    #[error("Please fill in all campaign details.")]
    IncompleteCampaign,
    #[error("Goal amount must be greater than zero.")]
    InvalidGoal,
    #[error("Please enter a valid donation amount.")]
    InvalidDonationAmount,
    #[error("Please select a campaign.")]
    CampaignRequired,
    #[error("Please enter the amount spent.")]
    InvalidExpenseAmount,
    #[error("Please describe the expense.")]
    ExpenseDescriptionRequired,
    #[error("Comment cannot be empty.")]
    EmptyComment,
}

/// Whether `email` looks like `name@host.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// Keep only ASCII digits, capped at `max` characters. CNIC and phone inputs
/// pass keystrokes through this.
#[must_use]
pub fn digits_only(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Username derived from the local part of an email address.
#[must_use]
pub fn username_from_email(email: &str) -> String {
    email.trim().split('@').next().unwrap_or_default().to_string()
}

/// Split a full name at the first space into first and last name.
#[must_use]
pub fn split_full_name(full_name: &str) -> (String, String) {
    match full_name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full_name.to_string(), String::new()),
    }
}

/// Validate the login form.
///
/// # Errors
/// Returns [`FormError::InvalidEmail`] or [`FormError::LoginPasswordTooShort`].
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FormError> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    if password.chars().count() < LOGIN_PASSWORD_MIN {
        return Err(FormError::LoginPasswordTooShort(LOGIN_PASSWORD_MIN));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Check registration password strength.
///
/// # Errors
/// Returns the first unmet strength rule.
pub fn validate_password(password: &str) -> Result<(), FormError> {
    if password.chars().count() < PASSWORD_MIN {
        return Err(FormError::PasswordTooShort(PASSWORD_MIN));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(FormError::PasswordNeedsDigit);
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(FormError::PasswordNeedsSymbol);
    }
    Ok(())
}

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub password2: String,
    pub cnic: String,
    pub phone: String,
    pub role: UserRole,
    pub organization_name: String,
}

/// Validate registration input and build the request body.
///
/// # Errors
/// Returns the first failing rule, in the order the form reports them.
pub fn validate_registration(form: &RegisterForm) -> Result<RegisterRequest, FormError> {
    let full_name = form.full_name.trim();
    if full_name.chars().count() > FULL_NAME_MAX {
        return Err(FormError::FullNameTooLong(FULL_NAME_MAX));
    }
    let email = form.email.trim();
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    validate_password(&form.password)?;
    if form.password != form.password2 {
        return Err(FormError::PasswordsDoNotMatch);
    }
    if form.cnic.len() != CNIC_DIGITS || !form.cnic.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormError::InvalidCnic);
    }
    if form.phone.len() != PHONE_DIGITS || !form.phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormError::InvalidPhone);
    }
    let organization = form.organization_name.trim();
    if form.role == UserRole::Ngo && organization.is_empty() {
        return Err(FormError::OrganizationRequired);
    }

    let (first_name, last_name) = split_full_name(full_name);
    Ok(RegisterRequest {
        email: email.to_string(),
        username: username_from_email(email),
        password: form.password.clone(),
        password2: form.password2.clone(),
        first_name,
        last_name,
        phone: Some(form.phone.clone()),
        cnic: Some(form.cnic.clone()),
        role: form.role.clone(),
        organization_name: (form.role == UserRole::Ngo).then(|| organization.to_string()),
    })
}

/// Parse `"lat, lng"` into a coordinate pair within valid ranges.
#[must_use]
pub fn parse_coordinates(raw: &str) -> Option<(f64, f64)> {
    let (lat, lng) = raw.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    let in_range = lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng);
    in_range.then_some((lat, lng))
}

/// Raw issue report input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub coordinates: String,
}

/// Validate an issue report.
///
/// # Errors
/// Returns [`FormError::IncompleteReport`] when the title, category or a
/// parsable pin is missing.
pub fn validate_report(form: &ReportForm) -> Result<CreateIssueRequest, FormError> {
    let title = form.title.trim();
    let category = form.category.trim();
    if title.is_empty() || category.is_empty() {
        return Err(FormError::IncompleteReport);
    }
    let (latitude, longitude) =
        parse_coordinates(&form.coordinates).ok_or(FormError::IncompleteReport)?;
    let location = match form.location.trim() {
        "" => DEFAULT_LOCATION,
        named => named,
    };
    Ok(CreateIssueRequest {
        title: title.to_string(),
        description: form.description.trim().to_string(),
        location: location.to_string(),
        category: IssueCategory::from(category),
        priority: None,
        latitude: Some(latitude),
        longitude: Some(longitude),
    })
}

/// Check a banner upload before it is attached.
///
/// # Errors
/// Returns [`FormError::BannerTooLarge`] for files over 10 MB.
pub fn validate_banner_size(bytes: u64) -> Result<(), FormError> {
    if bytes > MAX_BANNER_BYTES {
        Err(FormError::BannerTooLarge)
    } else {
        Ok(())
    }
}

/// Raw campaign creation input. `banner_bytes` is the size of the chosen
/// image, `None` when no file was picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub goal: String,
    pub zakat_eligible: bool,
    pub banner_bytes: Option<u64>,
}

/// Validate a new campaign.
///
/// # Errors
/// Returns the first failing rule: banner, then text fields, then the goal.
pub fn validate_campaign(form: &CampaignForm) -> Result<CreateCampaignRequest, FormError> {
    let bytes = form.banner_bytes.ok_or(FormError::BannerRequired)?;
    validate_banner_size(bytes)?;

    let title = form.title.trim();
    let category = form.category.trim();
    let description = form.description.trim();
    if title.is_empty() || category.is_empty() || description.is_empty() {
        return Err(FormError::IncompleteCampaign);
    }
    let goal = Amount::parse_lenient(&form.goal)
        .filter(|goal| goal.is_positive())
        .ok_or(FormError::InvalidGoal)?;

    Ok(CreateCampaignRequest {
        title: title.to_string(),
        description: description.to_string(),
        goal_amount: goal,
        category: CampaignCategory::from(category),
        zakat_eligible: form.zakat_eligible,
    })
}

/// Validate a donation record.
///
/// # Errors
/// Returns [`FormError::InvalidDonationAmount`] unless the amount is positive.
pub fn validate_donation(
    campaign: i64,
    amount: &str,
    is_anonymous: bool,
    payment_method: &str,
    transaction_id: &str,
) -> Result<CreateDonationRequest, FormError> {
    let amount = Amount::parse_lenient(amount)
        .filter(|amount| amount.is_positive())
        .ok_or(FormError::InvalidDonationAmount)?;
    let optional = |text: &str| {
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    };
    Ok(CreateDonationRequest {
        campaign,
        amount,
        is_anonymous,
        payment_method: optional(payment_method),
        transaction_id: optional(transaction_id),
    })
}

/// Validate an expense disclosure.
///
/// # Errors
/// Returns the first missing piece: campaign, amount, description.
pub fn validate_expense(
    campaign: &str,
    amount_spent: &str,
    description: &str,
) -> Result<CreateExpenseReport, FormError> {
    let campaign: i64 = campaign
        .trim()
        .parse()
        .map_err(|_| FormError::CampaignRequired)?;
    let amount_spent = Amount::parse_lenient(amount_spent)
        .filter(|amount| amount.is_positive())
        .ok_or(FormError::InvalidExpenseAmount)?;
    let description = description.trim();
    if description.is_empty() {
        return Err(FormError::ExpenseDescriptionRequired);
    }
    Ok(CreateExpenseReport {
        campaign,
        amount_spent,
        description: description.to_string(),
    })
}

/// Validate a comment before posting.
///
/// # Errors
/// Returns [`FormError::EmptyComment`] for blank text.
pub fn validate_comment(text: &str) -> Result<String, FormError> {
    let text = text.trim();
    if text.is_empty() {
        Err(FormError::EmptyComment)
    } else {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn register_form() -> RegisterForm {
        RegisterForm {
            full_name: "Ayesha Siddiqa Khan".into(),
            email: "ayesha@example.pk".into(),
            password: "secure#123".into(),
            password2: "secure#123".into(),
            cnic: "3520212345671".into(),
            phone: "03001234567".into(),
            role: UserRole::Citizen,
            organization_name: String::new(),
        }
    }

    #[test_case("user@example.com", true ; "plain address")]
    #[test_case("a.b@sub.domain.pk", true ; "subdomain")]
    #[test_case("user@localhost", false ; "missing tld")]
    #[test_case("user @example.com", false ; "space")]
    #[test_case("@example.com", false ; "missing local part")]
    #[test_case("", false ; "empty")]
    fn email_pattern(email: &str, valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }

    #[test]
    fn login_rules() {
        assert_eq!(
            validate_login("bad", "secret1"),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(
            validate_login("a@b.pk", "12345"),
            Err(FormError::LoginPasswordTooShort(6))
        );
        let request = validate_login(" a@b.pk ", "123456").unwrap();
        assert_eq!(request.email, "a@b.pk");
        assert_eq!(
            FormError::LoginPasswordTooShort(6).to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test_case("short1!", FormError::PasswordTooShort(8) ; "too short")]
    #[test_case("password!", FormError::PasswordNeedsDigit ; "no digit")]
    #[test_case("password1", FormError::PasswordNeedsSymbol ; "no symbol")]
    fn password_strength_failures(password: &str, expected: FormError) {
        assert_eq!(validate_password(password), Err(expected));
    }

    #[test]
    fn password_strength_messages() {
        assert_eq!(
            FormError::PasswordTooShort(8).to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            FormError::PasswordNeedsSymbol.to_string(),
            "Password must contain at least one symbol (!@#$%^&* etc.)"
        );
        assert!(validate_password("abcdefg1?").is_ok());
    }

    #[test]
    fn registration_builds_request() {
        let request = validate_registration(&register_form()).unwrap();
        assert_eq!(request.username, "ayesha");
        assert_eq!(request.first_name, "Ayesha");
        assert_eq!(request.last_name, "Siddiqa Khan");
        assert_eq!(request.cnic.as_deref(), Some("3520212345671"));
        assert_eq!(request.role, UserRole::Citizen);
        assert_eq!(request.organization_name, None);
    }

    #[test]
    fn registration_rules_in_order() {
        let mut form = register_form();
        form.full_name = "x".repeat(51);
        assert_eq!(
            validate_registration(&form),
            Err(FormError::FullNameTooLong(50))
        );

        let mut form = register_form();
        form.password2 = "different#1".into();
        assert_eq!(
            validate_registration(&form),
            Err(FormError::PasswordsDoNotMatch)
        );

        let mut form = register_form();
        form.cnic = "12345".into();
        assert_eq!(validate_registration(&form), Err(FormError::InvalidCnic));
        assert_eq!(
            FormError::InvalidCnic.to_string(),
            "CNIC must be exactly 13 digits"
        );

        let mut form = register_form();
        form.phone = "0300123456".into();
        assert_eq!(validate_registration(&form), Err(FormError::InvalidPhone));
    }

    #[test]
    fn ngo_registration_needs_organization() {
        let mut form = register_form();
        form.role = UserRole::Ngo;
        assert_eq!(
            validate_registration(&form),
            Err(FormError::OrganizationRequired)
        );
        form.organization_name = " Edhi Trust ".into();
        let request = validate_registration(&form).unwrap();
        assert_eq!(request.organization_name.as_deref(), Some("Edhi Trust"));
    }

    #[test]
    fn digit_filter_and_name_split() {
        assert_eq!(digits_only("35-202 1234567-1", 13), "3520212345671");
        assert_eq!(digits_only("030012345678999", 11), "03001234567");
        assert_eq!(
            split_full_name("Ali"),
            ("Ali".to_string(), String::new())
        );
        assert_eq!(username_from_email("sara.k@x.pk"), "sara.k");
    }

    #[test_case("32.1004, 74.8730", Some((32.1004, 74.873)) ; "comma and space")]
    #[test_case("32.1,74.8", Some((32.1, 74.8)) ; "no space")]
    #[test_case("95, 74", None ; "latitude out of range")]
    #[test_case("32.1", None ; "missing longitude")]
    #[test_case("north, east", None ; "not numbers")]
    fn coordinates(raw: &str, expected: Option<(f64, f64)>) {
        assert_eq!(parse_coordinates(raw), expected);
    }

    #[test]
    fn report_requires_title_category_and_pin() {
        let mut form = ReportForm {
            title: "Open manhole".into(),
            description: "Near the school".into(),
            category: "Sanitation".into(),
            location: String::new(),
            coordinates: "32.1, 74.87".into(),
        };
        let request = validate_report(&form).unwrap();
        assert_eq!(request.location, "Narowal");
        assert_eq!(request.category, IssueCategory::Sanitation);
        assert_eq!(request.latitude, Some(32.1));

        form.coordinates = String::new();
        assert_eq!(validate_report(&form), Err(FormError::IncompleteReport));
        assert_eq!(
            FormError::IncompleteReport.to_string(),
            "Please fill in all required fields and pin the location."
        );
    }

    #[test]
    fn campaign_rules() {
        let mut form = CampaignForm {
            title: "Winter relief".into(),
            description: "Blankets for families".into(),
            category: "Health".into(),
            goal: "250000".into(),
            zakat_eligible: true,
            banner_bytes: None,
        };
        assert_eq!(validate_campaign(&form), Err(FormError::BannerRequired));

        form.banner_bytes = Some(MAX_BANNER_BYTES + 1);
        assert_eq!(validate_campaign(&form), Err(FormError::BannerTooLarge));

        form.banner_bytes = Some(2_000_000);
        form.goal = "0".into();
        assert_eq!(validate_campaign(&form), Err(FormError::InvalidGoal));

        form.goal = "250,000".into();
        let request = validate_campaign(&form).unwrap();
        assert_eq!(request.goal_amount, Amount::from_rupees(250_000));
        assert_eq!(request.category, CampaignCategory::Health);
        assert!(request.zakat_eligible);
    }

    #[test_case(MAX_BANNER_BYTES, Ok(()) ; "exactly ten megabytes")]
    #[test_case(MAX_BANNER_BYTES + 1, Err(FormError::BannerTooLarge) ; "one byte over")]
    #[test_case(0, Ok(()) ; "empty file")]
    fn banner_size_limit(bytes: u64, expected: Result<(), FormError>) {
        assert_eq!(validate_banner_size(bytes), expected);
    }

    #[test]
    fn donation_rules() {
        assert_eq!(
            validate_donation(1, "0", false, "", ""),
            Err(FormError::InvalidDonationAmount)
        );
        assert_eq!(
            validate_donation(1, "abc", false, "", ""),
            Err(FormError::InvalidDonationAmount)
        );
        let request = validate_donation(4, "1500", true, "bank_transfer", " ").unwrap();
        assert_eq!(request.amount, Amount::from_rupees(1500));
        assert_eq!(request.payment_method.as_deref(), Some("bank_transfer"));
        assert_eq!(request.transaction_id, None);
    }

    #[test]
    fn expense_rules() {
        assert_eq!(
            validate_expense("", "100", "x"),
            Err(FormError::CampaignRequired)
        );
        assert_eq!(
            validate_expense("3", "-5", "x"),
            Err(FormError::InvalidExpenseAmount)
        );
        assert_eq!(
            validate_expense("3", "5000", "  "),
            Err(FormError::ExpenseDescriptionRequired)
        );
        let report = validate_expense("3", "5000", "Bought 20 blankets").unwrap();
        assert_eq!(report.campaign, 3);
    }

    #[test]
    fn comment_rules() {
        assert_eq!(validate_comment("   "), Err(FormError::EmptyComment));
        assert_eq!(validate_comment(" Thanks! ").unwrap(), "Thanks!");
    }
}
