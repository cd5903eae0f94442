//! Inline SVG icons for the details bar, keyed by name.
//!
//! Icon artwork from <https://materialdesignicons.com/>.

const USER: &str = r#"<svg style="width:24px;height:24px" viewBox="0 0 24 24"><path fill="currentColor" d="M12,4A4,4 0 0,1 16,8A4,4 0 0,1 12,12A4,4 0 0,1 8,8A4,4 0 0,1 12,4M12,14C16.42,14 20,15.79 20,18V20H4V18C4,15.79 7.58,14 12,14Z" /></svg>"#;

const TAG: &str = r#"<svg style="width:24px;height:24px" viewBox="0 0 24 24"><path fill="currentColor" d="M21.41 11.58L12.41 2.58A2 2 0 0 0 11 2H4A2 2 0 0 0 2 4V11A2 2 0 0 0 2.59 12.42L11.59 21.42A2 2 0 0 0 13 22A2 2 0 0 0 14.41 21.41L21.41 14.41A2 2 0 0 0 22 13A2 2 0 0 0 21.41 11.58M13 20L4 11V4H11L20 13M6.5 5A1.5 1.5 0 1 1 5 6.5A1.5 1.5 0 0 1 6.5 5Z" /></svg>"#;

const TIMER: &str = r#"<svg style="width:24px;height:24px" viewBox="0 0 24 24"><path fill="currentColor" d="M6,2H18V8H18V8L14,12L18,16V16H18V22H6V16H6V16L10,12L6,8V8H6V2M16,16.5L12,12.5L8,16.5V20H16V16.5M12,11.5L16,7.5V4H8V7.5L12,11.5M10,6H14V6.75L12,8.75L10,6.75V6Z" /></svg>"#;

/// Look up an icon by its symbolic key (`user`, `tag`, `timer`).
pub fn get(name: &str) -> Option<&'static str> {
    match name {
        "user" => Some(USER),
        "tag" => Some(TAG),
        "timer" => Some(TIMER),
        _ => None,
    }
}
