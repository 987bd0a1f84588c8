//! Consult booking and package selection offered next to the contact form.
//!
//! Both dialogs end in one of two places: a prefilled contact message, or a
//! link that leaves the page.

pub const BOOKING_REQUEST_MESSAGE: &str =
    "I'd like to book a 15-minute consult. My preferred times are: \n\n(1) \n(2) \n(3) ";

pub const POPUP_WIDTH: i32 = 900;
pub const POPUP_HEIGHT: i32 = 700;
pub const POPUP_NAME: &str = "calendlyPopup";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Booking,
    Pricing,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Next overlay state after a key press anywhere on the page.
    pub fn on_key(self, key: &str) -> Self {
        if key == "Escape" {
            Self::Closed
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageAction {
    /// Close the dialog and prefill the contact message.
    Prefill(String),
    /// Follow the pricing link.
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub bullets: &'static [&'static str],
}

impl Package {
    pub fn is_custom(&self) -> bool {
        self.id == "custom"
    }

    pub fn action(&self, pricing_url: &str) -> PackageAction {
        if self.is_custom() {
            PackageAction::Navigate(pricing_url.to_string())
        } else {
            PackageAction::Prefill(package_interest_message(self))
        }
    }

    pub fn action_label(&self) -> &'static str {
        if self.is_custom() {
            "Contact"
        } else {
            "Select"
        }
    }
}

pub const PACKAGES: [Package; 3] = [
    Package {
        id: "basic",
        title: "Basic",
        price: "$150",
        bullets: &["15-minute consult", "Project scoping"],
    },
    Package {
        id: "pro",
        title: "Pro",
        price: "$400",
        bullets: &["1-2 week build", "2 revisions", "Support"],
    },
    Package {
        id: "custom",
        title: "Custom",
        price: "Contact",
        bullets: &["Tailored solution", "Custom quote"],
    },
];

pub fn package_interest_message(package: &Package) -> String {
    format!(
        "I'm interested in the \"{}\" package. Please get in touch.",
        package.title
    )
}

/// `window.open` feature string for a popup centred on the browser window.
pub fn popup_features(screen_x: i32, screen_y: i32, outer_width: i32, outer_height: i32) -> String {
    let left = screen_x + ((outer_width - POPUP_WIDTH) / 2).max(0);
    let top = screen_y + ((outer_height - POPUP_HEIGHT) / 2).max(0);
    format!(
        "width={POPUP_WIDTH},height={POPUP_HEIGHT},left={left},top={top},noopener,noreferrer"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes_any_overlay() {
        assert_eq!(Overlay::Booking.on_key("Escape"), Overlay::Closed);
        assert_eq!(Overlay::Pricing.on_key("Escape"), Overlay::Closed);
        assert_eq!(Overlay::Pricing.on_key("Enter"), Overlay::Pricing);
        assert!(!Overlay::Closed.on_key("Escape").is_open());
    }

    #[test]
    fn test_package_actions() {
        let [basic, pro, custom] = PACKAGES;
        assert_eq!(
            basic.action("/pricing"),
            PackageAction::Prefill(
                "I'm interested in the \"Basic\" package. Please get in touch.".to_string()
            )
        );
        assert!(matches!(pro.action("/pricing"), PackageAction::Prefill(_)));
        assert_eq!(
            custom.action("/pricing"),
            PackageAction::Navigate("/pricing".to_string())
        );
        assert_eq!(custom.action_label(), "Contact");
    }

    #[test]
    fn test_popup_is_centred() {
        assert_eq!(
            popup_features(100, 50, 1900, 1100),
            "width=900,height=700,left=600,top=250,noopener,noreferrer"
        );
    }

    #[test]
    fn test_popup_never_left_of_window() {
        let features = popup_features(0, 0, 640, 480);
        assert!(features.contains("left=0,top=0"));
    }
}
