//! Console welcome banner.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// One `%c`-styled console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerLine {
    pub text: &'static str,
    pub style: &'static str,
}

pub const LINES: [BannerLine; 2] = [
    BannerLine {
        text: "%c👋 Welcome to my portfolio!",
        style: "font-size: 20px; font-weight: bold; color: #2563eb;",
    },
    BannerLine { text: "%cInterested in the code? Check it out on GitHub!", style: "font-size: 14px; color: #6b7280;" },
];
