//! Bilingual UI strings (English/Arabic) and RTL handling
//!
//! `tr` is a pure lookup so it stays testable; the reactive wrapper `I18n`
//! holds the active language and is provided as context in `App`. Switching
//! to Arabic flips the document to RTL via the `dir` attribute.

use contracts::domain::attribute::Language;
use leptos::prelude::*;

/// (english, arabic) pair for a key; unknown keys fall back to the key
/// itself so a missing entry is visible in the UI instead of crashing.
fn pair(key: &str) -> Option<(&'static str, &'static str)> {
    let pair = match key {
        "app.title" => ("Rental Office Admin", "لوحة إدارة مكتب التأجير"),

        "nav.overview" => ("Overview", "نظرة عامة"),
        "nav.cars" => ("Cars", "السيارات"),
        "nav.price_tiers" => ("Price tiers", "فئات الأسعار"),
        "nav.availability" => ("Availability", "التوفر"),
        "nav.bookings" => ("Bookings", "الحجوزات"),
        "nav.office_configs" => ("Office settings", "إعدادات المكتب"),

        "auth.login" => ("Log in", "تسجيل الدخول"),
        "auth.signup" => ("Create account", "إنشاء حساب"),
        "auth.logout" => ("Log out", "تسجيل الخروج"),
        "auth.phone" => ("Phone number", "رقم الهاتف"),
        "auth.password" => ("Password", "كلمة المرور"),
        "auth.office_name" => ("Office name", "اسم المكتب"),
        "auth.otp_code" => ("Verification code", "رمز التحقق"),
        "auth.verify" => ("Verify", "تحقق"),
        "auth.have_account" => ("Already have an account? Log in", "لديك حساب؟ تسجيل الدخول"),
        "auth.need_account" => ("New office? Create an account", "مكتب جديد؟ إنشاء حساب"),
        "auth.phone_required" => ("Phone number is required", "رقم الهاتف مطلوب"),
        "auth.phone_invalid" => (
            "Phone number must be 8 digits (+965 XXXX XXXX)",
            "يجب أن يتكون رقم الهاتف من 8 أرقام (+965 XXXX XXXX)",
        ),

        "common.save" => ("Save", "حفظ"),
        "common.cancel" => ("Cancel", "إلغاء"),
        "common.delete" => ("Delete", "حذف"),
        "common.edit" => ("Edit", "تعديل"),
        "common.refresh" => ("Refresh", "تحديث"),
        "common.loading" => ("Loading...", "جارٍ التحميل..."),
        "common.actions" => ("Actions", "إجراءات"),
        "common.confirm_delete" => (
            "Delete the selected items?",
            "هل تريد حذف العناصر المحددة؟",
        ),

        "error.load_failed" => ("Failed to load", "فشل التحميل"),
        "error.save_failed" => ("Failed to save", "فشل الحفظ"),

        "cars.title" => ("Cars", "السيارات"),
        "cars.new" => ("New car", "سيارة جديدة"),
        "cars.plate" => ("Plate number", "رقم اللوحة"),
        "cars.brand" => ("Brand", "الماركة"),
        "cars.model" => ("Model", "الموديل"),
        "cars.year" => ("Year", "السنة"),
        "cars.color" => ("Color", "اللون"),
        "cars.transmission" => ("Transmission", "ناقل الحركة"),
        "cars.body_type" => ("Body type", "نوع الهيكل"),
        "cars.daily_price" => ("Daily price (KWD)", "السعر اليومي (د.ك)"),
        "cars.status" => ("Status", "الحالة"),
        "cars.upload" => ("Bulk upload (.xlsx)", "رفع ملف (.xlsx)"),
        "cars.template" => ("Download template", "تنزيل النموذج"),
        "cars.upload_too_large" => (
            "File is larger than 10MB",
            "حجم الملف أكبر من 10 ميغابايت",
        ),
        "cars.upload_wrong_type" => (
            "Only .xlsx files are accepted",
            "يُقبل فقط ملفات .xlsx",
        ),
        "cars.empty" => (
            "No cars yet. Add your first car to start receiving bookings.",
            "لا توجد سيارات بعد. أضف سيارتك الأولى لبدء استقبال الحجوزات.",
        ),

        "status.available" => ("Available", "متاحة"),
        "status.rented" => ("Rented", "مؤجرة"),
        "status.maintenance" => ("Maintenance", "صيانة"),
        "status.hidden" => ("Hidden", "مخفية"),

        "tiers.title" => ("Price tiers", "فئات الأسعار"),
        "tiers.new" => ("New tier", "فئة جديدة"),
        "tiers.name" => ("Tier name", "اسم الفئة"),
        "tiers.days" => ("Days", "الأيام"),
        "tiers.days_from" => ("From day", "من يوم"),
        "tiers.days_to" => ("To day (empty = unlimited)", "إلى يوم (فارغ = غير محدود)"),
        "tiers.multiplier" => ("Multiplier", "المعامل"),
        "tiers.discount" => ("Discount", "الخصم"),
        "tiers.reset" => ("Reset to defaults", "إعادة التعيين للافتراضي"),
        "tiers.reset_confirm" => (
            "Replace all tiers with the defaults?",
            "استبدال جميع الفئات بالإعدادات الافتراضية؟",
        ),

        "bookings.title" => ("Incoming bookings", "الحجوزات الواردة"),
        "bookings.customer" => ("Customer", "العميل"),
        "bookings.phone" => ("Phone", "الهاتف"),
        "bookings.dates" => ("Dates", "التواريخ"),
        "bookings.total" => ("Total (KWD)", "الإجمالي (د.ك)"),
        "bookings.accept" => ("Accept", "قبول"),
        "bookings.reject" => ("Reject", "رفض"),
        "bookings.cancel" => ("Cancel booking", "إلغاء الحجز"),
        "bookings.enabled" => ("Accepting bookings", "استقبال الحجوزات"),

        "booking_status.pending" => ("Pending", "قيد الانتظار"),
        "booking_status.accepted" => ("Accepted", "مقبول"),
        "booking_status.rejected" => ("Rejected", "مرفوض"),
        "booking_status.cancelled" => ("Cancelled", "ملغى"),
        "booking_status.completed" => ("Completed", "مكتمل"),

        "avail.title" => ("Availability & maintenance", "التوفر والصيانة"),
        "avail.periods" => ("Availability periods", "فترات التوفر"),
        "avail.maintenance" => ("Maintenance", "الصيانة"),
        "avail.quarterly" => ("Quarterly planning", "التخطيط الربعي"),
        "avail.car" => ("Car", "السيارة"),
        "avail.from" => ("From", "من"),
        "avail.to" => ("To", "إلى"),
        "avail.reason" => ("Reason", "السبب"),
        "avail.quarter" => ("Quarter", "الربع"),
        "avail.planned_days" => ("Planned days", "الأيام المخططة"),
        "avail.new_period" => ("New period", "فترة جديدة"),
        "avail.new_maintenance" => ("New maintenance", "صيانة جديدة"),

        "office.title" => ("Office settings", "إعدادات المكتب"),
        "office.name_en" => ("Office name (English)", "اسم المكتب (بالإنجليزية)"),
        "office.name_ar" => ("Office name (Arabic)", "اسم المكتب (بالعربية)"),
        "office.address_en" => ("Address (English)", "العنوان (بالإنجليزية)"),
        "office.address_ar" => ("Address (Arabic)", "العنوان (بالعربية)"),
        "office.phone" => ("Contact phone", "هاتف التواصل"),

        "overview.title" => ("Overview", "نظرة عامة"),
        "overview.total_cars" => ("Cars in fleet", "سيارات الأسطول"),
        "overview.pending_bookings" => ("Pending bookings", "حجوزات قيد الانتظار"),
        "overview.welcome" => ("Welcome!", "مرحباً!"),
        "overview.welcome_text" => (
            "Set up your fleet, price tiers and availability to start receiving bookings.",
            "قم بإعداد أسطولك وفئات الأسعار والتوفر لبدء استقبال الحجوزات.",
        ),
        "overview.dismiss" => ("Got it", "فهمت"),

        _ => return None,
    };
    Some(pair)
}

/// Translate a key for the given language
pub fn tr(lang: Language, key: &str) -> &str {
    match pair(key) {
        Some((en, ar)) => match lang {
            Language::En => en,
            Language::Ar => ar,
        },
        None => {
            log::warn!("missing i18n key: {}", key);
            // returning the key makes the hole visible in the UI
            key
        }
    }
}

// ============================================================================
// Reactive wrapper
// ============================================================================

#[derive(Clone, Copy)]
pub struct I18n {
    pub lang: RwSignal<Language>,
}

impl I18n {
    pub fn new(initial: Language) -> Self {
        Self {
            lang: RwSignal::new(initial),
        }
    }

    /// Reactive translation: reads the language signal
    pub fn t(&self, key: &str) -> String {
        tr(self.lang.get(), key).to_string()
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not found in component tree")
}

/// Apply the language to the document: `dir` controls RTL layout.
pub fn apply_document_dir(lang: Language) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("dir", lang.dir());
        let _ = root.set_attribute("lang", lang.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_translate_in_both_languages() {
        for key in ["app.title", "nav.cars", "tiers.discount", "auth.phone_invalid"] {
            assert!(!tr(Language::En, key).is_empty(), "missing en: {}", key);
            assert!(!tr(Language::Ar, key).is_empty(), "missing ar: {}", key);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_the_key() {
        assert_eq!(tr(Language::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_direction() {
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.dir(), "rtl");
    }
}
