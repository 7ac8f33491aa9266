//! `veleslog palette`: list the domain colors.

use veleslog::log::Color;

/// Print index, name and a colored sample of every palette entry.
pub fn run(plain: bool) {
    for color in Color::ALL {
        if plain {
            println!("{:>2}  {}", color.index(), color.name());
        } else {
            println!(
                "{:>2}  {:<13} {}sample{}",
                color.index(),
                color.name(),
                color.ansi_code(),
                Color::Reset.ansi_code()
            );
        }
    }
}
