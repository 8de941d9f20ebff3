use nalgebra::Complex;

/// a single entry in a character table. most groups only need the real part,
/// but the separable pairs in the cyclic groups are complex
pub type Character = Complex<f64>;

/// anything smaller than this is printed as zero
const TOL: f64 = 1e-10;

/// number of significant digits for non-integral characters, like `%g`
const SIG_FIGS: i32 = 6;

/// shorthand for a purely real [Character]
pub const fn re(x: f64) -> Character {
    Complex::new(x, 0.0)
}

/// `exp(2πik/n)`, the building block of the cyclic group tables
pub fn root_of_unity(k: i32, n: i32) -> Character {
    let theta = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
    Complex::new(theta.cos(), theta.sin())
}

fn chop(x: f64) -> f64 {
    if x.abs() < TOL { 0.0 } else { x }
}

fn format_real(x: f64) -> String {
    let r = x.round();
    if (x - r).abs() < TOL {
        // `as` takes care of -0.0 too
        return format!("{}", r as i64);
    }
    let digits = x.abs().log10().floor() as i32 + 1;
    let prec = (SIG_FIGS - digits).max(0) as usize;
    let s = format!("{x:.prec$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    }
}

fn format_imag(x: f64) -> String {
    let s = format_real(x);
    match s.as_str() {
        "1" => "i".to_owned(),
        "-1" => "-i".to_owned(),
        _ => format!("{s}i"),
    }
}

/// format `c` compactly for a table cell: integers stay integers, other reals
/// get six significant figures, and complex values are written as `a+bi`
pub fn format_character(c: Character) -> String {
    let (re, im) = (chop(c.re), chop(c.im));
    if im == 0.0 {
        format_real(re)
    } else if re == 0.0 {
        format_imag(im)
    } else {
        let sign = if im < 0.0 { '-' } else { '+' };
        format!("{}{sign}{}", format_real(re), format_imag(im.abs()))
    }
}
