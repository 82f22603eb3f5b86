pub mod detail_body;
pub mod detail_header;
pub mod detail_screen;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use detail_body::{DetailBody, DetailBodyProps};
pub use detail_header::{DetailHeader, DetailHeaderProps};
pub use detail_screen::{DetailScreen, DetailScreenProps, ERROR_ICON};

/// "solar-power" -> "Solar Power"
pub fn format_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => "".to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
