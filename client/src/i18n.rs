//! Static message catalog for English and Hebrew.
//!
//! DESIGN
//! ======
//! Every user-visible string is a `Msg` key resolved per `Language`, so pages,
//! toasts, and validation errors share one table. Strings that interpolate
//! values get dedicated formatter functions instead of runtime templating.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

impl Language {
    /// BCP-47 code used for `<html lang>` and persistence.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Self::En),
            "he" => Some(Self::He),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::He)
    }

    /// The other language, for the header switch.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::He,
            Self::He => Self::En,
        }
    }

    /// Language name written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::He => "עברית",
        }
    }

    pub fn text(self, msg: Msg) -> &'static str {
        match self {
            Self::En => en(msg),
            Self::He => he(msg),
        }
    }
}

/// Message keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Msg {
    HeaderTitle,
    NavForm,
    NavAbout,
    NavProducts,
    PageNotFound,

    CheckInTitle,
    CheckInSubtitle,
    RequiredNote,
    Required,
    Optional,
    ErrorsHeading,
    SaveContact,
    SavingContact,
    ContactSaved,

    FirstNameLabel,
    FirstNamePlaceholder,
    LastNameLabel,
    LastNamePlaceholder,
    EmailLabel,
    EmailPlaceholder,
    PhoneLabel,
    PhonePlaceholder,
    PasswordLabel,
    PasswordPlaceholder,
    ConfirmPasswordLabel,
    ConfirmPasswordPlaceholder,
    CompanyLabel,
    CompanyPlaceholder,
    RoleLabel,
    RoleDesigner,
    RoleEngineer,
    RoleProduct,
    RoleOther,
    ContactMethodLegend,
    ContactMethodEmail,
    ContactMethodPhone,
    ContactMethodSms,
    SubscribeLabel,
    ExperienceLabel,
    ExperienceRangeHint,
    BioLabel,
    BioPlaceholder,
    WebsiteLabel,
    WebsitePlaceholder,
    StartDateLabel,
    GuestsLabel,

    FirstNameRequired,
    EmailRequired,
    EmailInvalid,
    PasswordMin,
    ConfirmPasswordRequired,
    ConfirmPasswordMismatch,
    ExperienceMin,
    ExperienceMax,
    GuestsMin,
    GuestsMax,
    WebsiteInvalid,

    ProductsTitle,
    LoadingProducts,
    ProductsLoadFailed,
    LoadMore,
    LoadingMore,
    NoMoreProducts,
    ListView,
    TableView,
    Search,
    SearchPlaceholder,
    ColumnTitle,
    ColumnPrice,
    ColumnCategory,
    NoMatches,
    MissingId,
    MissingProduct,
    LoadingDetail,
    DetailError,
    DetailLoadFailed,
    BackToProducts,
    Description,
    Price,
    AddToCart,
    AddingToCart,
    AddToCartSuccess,
    AddToCartFailed,

    CartTitle,
    CloseCart,
    Close,
    CartEmpty,
    Remove,
    Total,
    Clear,
    CartInvalidItem,
    CartItemNotFound,
    CartCleared,
    CartAlreadyEmpty,

    AboutTitle,
    AboutBody,
    ShowSuccessToast,
    ShowErrorToast,
    DemoSaved,
    DemoFailed,

    NotificationsLabel,
    DismissNotification,
}

#[allow(clippy::too_many_lines)]
fn en(msg: Msg) -> &'static str {
    match msg {
        Msg::HeaderTitle => "Demo Shop",
        Msg::NavForm => "Form",
        Msg::NavAbout => "About",
        Msg::NavProducts => "Products",
        Msg::PageNotFound => "Page not found.",

        Msg::CheckInTitle => "Check-in",
        Msg::CheckInSubtitle => "Tell us a little about yourself.",
        Msg::RequiredNote => "Fields marked required must be filled in.",
        Msg::Required => "Required",
        Msg::Optional => "Optional",
        Msg::ErrorsHeading => "Please fix the highlighted fields.",
        Msg::SaveContact => "Save contact",
        Msg::SavingContact => "Saving...",
        Msg::ContactSaved => "Contact saved.",

        Msg::FirstNameLabel => "First name",
        Msg::FirstNamePlaceholder => "Ada",
        Msg::LastNameLabel => "Last name",
        Msg::LastNamePlaceholder => "Lovelace",
        Msg::EmailLabel => "Email",
        Msg::EmailPlaceholder => "ada@example.com",
        Msg::PhoneLabel => "Phone",
        Msg::PhonePlaceholder => "+1 555 0100",
        Msg::PasswordLabel => "Password",
        Msg::PasswordPlaceholder => "At least 8 characters",
        Msg::ConfirmPasswordLabel => "Confirm password",
        Msg::ConfirmPasswordPlaceholder => "Repeat password",
        Msg::CompanyLabel => "Company",
        Msg::CompanyPlaceholder => "Analytical Engines Ltd.",
        Msg::RoleLabel => "Role",
        Msg::RoleDesigner => "Designer",
        Msg::RoleEngineer => "Engineer",
        Msg::RoleProduct => "Product",
        Msg::RoleOther => "Other",
        Msg::ContactMethodLegend => "Preferred contact method",
        Msg::ContactMethodEmail => "Email",
        Msg::ContactMethodPhone => "Phone",
        Msg::ContactMethodSms => "SMS",
        Msg::SubscribeLabel => "Subscribe to updates",
        Msg::ExperienceLabel => "Years of experience",
        Msg::ExperienceRangeHint => "(0-10)",
        Msg::BioLabel => "Bio",
        Msg::BioPlaceholder => "A few words about you",
        Msg::WebsiteLabel => "Website",
        Msg::WebsitePlaceholder => "https://example.com",
        Msg::StartDateLabel => "Start date",
        Msg::GuestsLabel => "Guests",

        Msg::FirstNameRequired => "First name is required.",
        Msg::EmailRequired => "Email is required.",
        Msg::EmailInvalid => "Enter a valid email address.",
        Msg::PasswordMin => "Password must be at least 8 characters.",
        Msg::ConfirmPasswordRequired => "Please confirm your password.",
        Msg::ConfirmPasswordMismatch => "Passwords do not match.",
        Msg::ExperienceMin => "Experience cannot be negative.",
        Msg::ExperienceMax => "Experience cannot exceed 10 years.",
        Msg::GuestsMin => "At least 1 guest is required.",
        Msg::GuestsMax => "No more than 10 guests.",
        Msg::WebsiteInvalid => "Enter a valid URL.",

        Msg::ProductsTitle => "Products",
        Msg::LoadingProducts => "Loading products...",
        Msg::ProductsLoadFailed => "Failed to load products",
        Msg::LoadMore => "Load more",
        Msg::LoadingMore => "Loading...",
        Msg::NoMoreProducts => "No more products",
        Msg::ListView => "List View",
        Msg::TableView => "Table View",
        Msg::Search => "Search",
        Msg::SearchPlaceholder => "Filter by title",
        Msg::ColumnTitle => "Title",
        Msg::ColumnPrice => "Price",
        Msg::ColumnCategory => "Category",
        Msg::NoMatches => "No products match your search.",
        Msg::MissingId => "Missing product id.",
        Msg::MissingProduct => "Product is not loaded yet.",
        Msg::LoadingDetail => "Loading product...",
        Msg::DetailError => "Could not load product:",
        Msg::DetailLoadFailed => "Failed to load product",
        Msg::BackToProducts => "Back to products",
        Msg::Description => "Description",
        Msg::Price => "Price",
        Msg::AddToCart => "Add to Cart",
        Msg::AddingToCart => "Adding...",
        Msg::AddToCartSuccess => "Product added to cart",
        Msg::AddToCartFailed => "Failed to add product to cart",

        Msg::CartTitle => "Cart",
        Msg::CloseCart => "Close cart",
        Msg::Close => "Close",
        Msg::CartEmpty => "Your cart is empty.",
        Msg::Remove => "Remove",
        Msg::Total => "Total",
        Msg::Clear => "Clear",
        Msg::CartInvalidItem => "Unable to add item to cart (invalid item).",
        Msg::CartItemNotFound => "Item not found in cart.",
        Msg::CartCleared => "Cleared cart.",
        Msg::CartAlreadyEmpty => "Cart is already empty.",

        Msg::AboutTitle => "About",
        Msg::AboutBody => "This demo shows a check-in form, a product catalog, and a shopping cart.",
        Msg::ShowSuccessToast => "Show success toast",
        Msg::ShowErrorToast => "Show error toast",
        Msg::DemoSaved => "Saved successfully.",
        Msg::DemoFailed => "Something went wrong.",

        Msg::NotificationsLabel => "Notifications",
        Msg::DismissNotification => "Dismiss notification",
    }
}

#[allow(clippy::too_many_lines)]
fn he(msg: Msg) -> &'static str {
    match msg {
        Msg::HeaderTitle => "חנות הדגמה",
        Msg::NavForm => "טופס",
        Msg::NavAbout => "אודות",
        Msg::NavProducts => "מוצרים",
        Msg::PageNotFound => "הדף לא נמצא.",

        Msg::CheckInTitle => "צ'ק-אין",
        Msg::CheckInSubtitle => "ספרו לנו קצת על עצמכם.",
        Msg::RequiredNote => "יש למלא את שדות החובה.",
        Msg::Required => "חובה",
        Msg::Optional => "רשות",
        Msg::ErrorsHeading => "נא לתקן את השדות המסומנים.",
        Msg::SaveContact => "שמירת איש קשר",
        Msg::SavingContact => "שומר...",
        Msg::ContactSaved => "איש הקשר נשמר.",

        Msg::FirstNameLabel => "שם פרטי",
        Msg::FirstNamePlaceholder => "עדה",
        Msg::LastNameLabel => "שם משפחה",
        Msg::LastNamePlaceholder => "לאבלייס",
        Msg::EmailLabel => "אימייל",
        Msg::EmailPlaceholder => "ada@example.com",
        Msg::PhoneLabel => "טלפון",
        Msg::PhonePlaceholder => "050-0000000",
        Msg::PasswordLabel => "סיסמה",
        Msg::PasswordPlaceholder => "לפחות 8 תווים",
        Msg::ConfirmPasswordLabel => "אימות סיסמה",
        Msg::ConfirmPasswordPlaceholder => "הקלידו שוב את הסיסמה",
        Msg::CompanyLabel => "חברה",
        Msg::CompanyPlaceholder => "שם החברה",
        Msg::RoleLabel => "תפקיד",
        Msg::RoleDesigner => "מעצב/ת",
        Msg::RoleEngineer => "מהנדס/ת",
        Msg::RoleProduct => "מוצר",
        Msg::RoleOther => "אחר",
        Msg::ContactMethodLegend => "דרך יצירת קשר מועדפת",
        Msg::ContactMethodEmail => "אימייל",
        Msg::ContactMethodPhone => "טלפון",
        Msg::ContactMethodSms => "SMS",
        Msg::SubscribeLabel => "הרשמה לעדכונים",
        Msg::ExperienceLabel => "שנות ניסיון",
        Msg::ExperienceRangeHint => "(0-10)",
        Msg::BioLabel => "קצת עליי",
        Msg::BioPlaceholder => "כמה מילים עליכם",
        Msg::WebsiteLabel => "אתר",
        Msg::WebsitePlaceholder => "https://example.com",
        Msg::StartDateLabel => "תאריך התחלה",
        Msg::GuestsLabel => "אורחים",

        Msg::FirstNameRequired => "שם פרטי הוא שדה חובה.",
        Msg::EmailRequired => "אימייל הוא שדה חובה.",
        Msg::EmailInvalid => "נא להזין כתובת אימייל תקינה.",
        Msg::PasswordMin => "הסיסמה חייבת להכיל לפחות 8 תווים.",
        Msg::ConfirmPasswordRequired => "נא לאמת את הסיסמה.",
        Msg::ConfirmPasswordMismatch => "הסיסמאות אינן תואמות.",
        Msg::ExperienceMin => "הניסיון לא יכול להיות שלילי.",
        Msg::ExperienceMax => "הניסיון לא יכול לעלות על 10 שנים.",
        Msg::GuestsMin => "נדרש לפחות אורח אחד.",
        Msg::GuestsMax => "לא יותר מ-10 אורחים.",
        Msg::WebsiteInvalid => "נא להזין כתובת URL תקינה.",

        Msg::ProductsTitle => "מוצרים",
        Msg::LoadingProducts => "טוען מוצרים...",
        Msg::ProductsLoadFailed => "טעינת המוצרים נכשלה",
        Msg::LoadMore => "טען עוד",
        Msg::LoadingMore => "טוען...",
        Msg::NoMoreProducts => "אין מוצרים נוספים",
        Msg::ListView => "תצוגת רשימה",
        Msg::TableView => "תצוגת טבלה",
        Msg::Search => "חיפוש",
        Msg::SearchPlaceholder => "סינון לפי שם",
        Msg::ColumnTitle => "שם",
        Msg::ColumnPrice => "מחיר",
        Msg::ColumnCategory => "קטגוריה",
        Msg::NoMatches => "אין מוצרים התואמים לחיפוש.",
        Msg::MissingId => "חסר מזהה מוצר.",
        Msg::MissingProduct => "המוצר עדיין לא נטען.",
        Msg::LoadingDetail => "טוען מוצר...",
        Msg::DetailError => "לא ניתן לטעון את המוצר:",
        Msg::DetailLoadFailed => "טעינת המוצר נכשלה",
        Msg::BackToProducts => "חזרה למוצרים",
        Msg::Description => "תיאור",
        Msg::Price => "מחיר",
        Msg::AddToCart => "הוספה לעגלה",
        Msg::AddingToCart => "מוסיף...",
        Msg::AddToCartSuccess => "המוצר נוסף לעגלה",
        Msg::AddToCartFailed => "הוספת המוצר לעגלה נכשלה",

        Msg::CartTitle => "עגלה",
        Msg::CloseCart => "סגירת העגלה",
        Msg::Close => "סגירה",
        Msg::CartEmpty => "העגלה ריקה.",
        Msg::Remove => "הסרה",
        Msg::Total => "סה\"כ",
        Msg::Clear => "ניקוי",
        Msg::CartInvalidItem => "לא ניתן להוסיף את הפריט לעגלה (פריט לא תקין).",
        Msg::CartItemNotFound => "הפריט לא נמצא בעגלה.",
        Msg::CartCleared => "העגלה נוקתה.",
        Msg::CartAlreadyEmpty => "העגלה כבר ריקה.",

        Msg::AboutTitle => "אודות",
        Msg::AboutBody => "הדגמה של טופס צ'ק-אין, קטלוג מוצרים ועגלת קניות.",
        Msg::ShowSuccessToast => "הצגת הודעת הצלחה",
        Msg::ShowErrorToast => "הצגת הודעת שגיאה",
        Msg::DemoSaved => "נשמר בהצלחה.",
        Msg::DemoFailed => "משהו השתבש.",

        Msg::NotificationsLabel => "התראות",
        Msg::DismissNotification => "סגירת התראה",
    }
}

/// Heading counter, e.g. "1 contact" / "3 contacts".
pub fn contact_count(lang: Language, count: usize) -> String {
    match (lang, count) {
        (Language::En, 1) => "1 contact".to_owned(),
        (Language::En, n) => format!("{n} contacts"),
        (Language::He, 1) => "איש קשר אחד".to_owned(),
        (Language::He, n) => format!("{n} אנשי קשר"),
    }
}

/// Header cart button, e.g. "Cart (2)".
pub fn cart_label(lang: Language, count: usize) -> String {
    format!("{} ({count})", lang.text(Msg::CartTitle))
}

/// Header theme toggle, e.g. "Theme: light".
pub fn theme_label(lang: Language, theme: &str) -> String {
    match lang {
        Language::En => format!("Theme: {theme}"),
        Language::He => format!("ערכת נושא: {theme}"),
    }
}

/// Header language switch showing the active language.
pub fn language_label(lang: Language) -> String {
    match lang {
        Language::En => format!("Language: {}", lang.native_name()),
        Language::He => format!("שפה: {}", lang.native_name()),
    }
}

pub fn cart_added(lang: Language, title: &str) -> String {
    match lang {
        Language::En => format!("Added “{title}” to cart."),
        Language::He => format!("“{title}” נוסף לעגלה."),
    }
}

pub fn cart_incremented(lang: Language, title: &str) -> String {
    match lang {
        Language::En => format!("Increased quantity of “{title}”."),
        Language::He => format!("הכמות של “{title}” עודכנה."),
    }
}

pub fn cart_removed(lang: Language, title: &str) -> String {
    match lang {
        Language::En => format!("Removed “{title}” from cart."),
        Language::He => format!("“{title}” הוסר מהעגלה."),
    }
}

/// Cart line summary, e.g. "Qty 2 · $19.98".
pub fn cart_line(lang: Language, quantity: u32, amount: f64) -> String {
    match lang {
        Language::En => format!("Qty {quantity} · {}", format_price(amount)),
        Language::He => format!("כמות {quantity} · {}", format_price(amount)),
    }
}

/// Dollar amount with two decimals.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}
