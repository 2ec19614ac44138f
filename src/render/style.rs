// Colour and label formatting for the canvas painters.
//
// Pure string helpers; no canvas access, so they can be tested on the host.

/// `#RGB` or `#RRGGBB` to channels.
pub fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v * 17;
            }
            Some(out)
        }
        6 => Some([
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        ]),
        _ => None,
    }
}

/// CSS `rgba(...)`, alpha clamped to [0, 1].
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    let a = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("rgba({},{},{},{})", rgb[0], rgb[1], rgb[2], trim_alpha(a))
}

#[inline]
pub fn white(alpha: f32) -> String {
    rgba([255, 255, 255], alpha)
}

/// A host hex colour at `alpha`. Colours we cannot parse are used as given.
pub fn with_alpha(color: &str, alpha: f32) -> String {
    match parse_hex(color) {
        Some(rgb) => rgba(rgb, alpha),
        None => color.to_string(),
    }
}

/// Ripple colours arrive as `rgb(r,g,b)`; hex is accepted too.
pub fn ripple_stroke(color: &str, opacity: f32) -> String {
    let color = color.trim();
    if let Some(inner) = color
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let a = trim_alpha(opacity.clamp(0.0, 1.0));
        return format!("rgba({},{})", inner, a);
    }
    with_alpha(color, opacity)
}

fn trim_alpha(a: f32) -> String {
    let s = format!("{:.3}", a);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Whole amounts without a fraction, otherwise as few digits as needed.
fn money(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// `+$30` for credit, `-$80` for debt.
pub fn balance_label(balance: f64) -> String {
    if balance >= 0.0 {
        format!("+${}", money(balance.abs()))
    } else {
        format!("-${}", money(balance.abs()))
    }
}

pub fn amount_label(amount: u32) -> String {
    format!("${}", amount)
}

pub fn font(weight: &str, px: f64, family: &str) -> String {
    if weight.is_empty() {
        format!("{}px {}", px.round(), family)
    } else {
        format!("{} {}px {}", weight, px.round(), family)
    }
}
