//! the built-in character tables, grouped by family the way they appear in
//! the usual textbook appendices

use crate::{
    character::{Character, re, root_of_unity},
    irrep::Irrep as Ir,
    point_group::{CharacterTable, TableError},
};

type Table = Result<CharacterTable, TableError>;

fn real(rows: &[&[f64]]) -> Vec<Vec<Character>> {
    rows.iter()
        .map(|row| row.iter().copied().map(re).collect())
        .collect()
}

/// rows of the cyclic group Cn, where row `k` holds `ε^(kj)` for operation
/// `Cn^j` and `ε = exp(2πi/n)`
fn cyclic(n: i32, ks: &[i32]) -> Vec<Vec<Character>> {
    ks.iter()
        .map(|k| (0..n).map(|j| root_of_unity(k * j, n)).collect())
        .collect()
}

/// the labels of the built-in tables in registry order, paired with their
/// constructors
pub(crate) const BUILTIN: [(&str, fn() -> Table); 20] = [
    ("C1", c1),
    ("Ci", ci),
    ("Cs", cs),
    ("C2", c2),
    ("C3", c3),
    ("C4", c4),
    ("C5", c5),
    ("C2v", c2v),
    ("C3v", c3v),
    ("C2h", c2h),
    ("D2", d2),
    ("D3", d3),
    ("D2h", d2h),
    ("D3h", d3h),
    ("D4h", d4h),
    ("D2d", d2d),
    ("D3d", d3d),
    ("Td", td),
    ("Oh", oh),
    ("Ih", ih),
];

// non-axial

pub fn c1() -> Table {
    CharacterTable::new(
        "C1",
        &["E"],
        &[1],
        vec![Ir::new(
            "A",
            &["x", "y", "z", "Rx", "Ry", "Rz"],
            &["x2", "y2", "z2", "xy", "xz", "yz"],
        )],
        real(&[&[1.0]]),
    )
}

pub fn ci() -> Table {
    CharacterTable::new(
        "Ci",
        &["E", "i"],
        &[1, 1],
        vec![
            Ir::new(
                "Ag",
                &["Rx", "Ry", "Rz"],
                &["x2", "y2", "z2", "xy", "xz", "yz"],
            ),
            Ir::new("Au", &["x", "y", "z"], &[]),
        ],
        real(&[&[1.0, 1.0], &[1.0, -1.0]]),
    )
}

pub fn cs() -> Table {
    CharacterTable::new(
        "Cs",
        &["E", "σh"],
        &[1, 1],
        vec![
            Ir::new("A'", &["x", "y", "Rz"], &["x2", "y2", "z2", "xy"]),
            Ir::new("A\"", &["z", "Rx", "Ry"], &["xz", "yz"]),
        ],
        real(&[&[1.0, 1.0], &[1.0, -1.0]]),
    )
}

// Cn

pub fn c2() -> Table {
    CharacterTable::new(
        "C2",
        &["E", "C2"],
        &[1, 1],
        vec![
            Ir::new("A", &["z", "Rz"], &["x2", "y2", "z2", "xy"]),
            Ir::new("B", &["x", "y", "Rx", "Ry"], &["xz", "yz"]),
        ],
        real(&[&[1.0, 1.0], &[1.0, -1.0]]),
    )
}

pub fn c3() -> Table {
    let e_quad = ["(x2-y2, xy)", "(xz, yz)"];
    CharacterTable::new(
        "C3",
        &["E", "C3", "C3^2"],
        &[1, 1, 1],
        vec![
            Ir::new("A", &["z", "Rz"], &["x2+y2", "z2"]),
            Ir::new("E_a", &["x+iy", "Rx+iRy"], &e_quad),
            Ir::new("E_b", &["x-iy", "Rx-iRy"], &e_quad),
        ],
        cyclic(3, &[0, 1, 2]),
    )
}

pub fn c4() -> Table {
    CharacterTable::new(
        "C4",
        &["E", "C4", "C2", "C4^3"],
        &[1, 1, 1, 1],
        vec![
            Ir::new("A", &["z", "Rz"], &["x2+y2", "z2"]),
            Ir::new("B", &[], &["x2-y2", "xy"]),
            Ir::new("E_a", &["x+iy", "Rx+iRy"], &["(xz, yz)"]),
            Ir::new("E_b", &["x-iy", "Rx-iRy"], &["(xz, yz)"]),
        ],
        cyclic(4, &[0, 2, 1, 3]),
    )
}

pub fn c5() -> Table {
    CharacterTable::new(
        "C5",
        &["E", "C5", "C5^2", "C5^3", "C5^4"],
        &[1, 1, 1, 1, 1],
        vec![
            Ir::new("A", &["z", "Rz"], &["x2+y2", "z2"]),
            Ir::new("E_1a", &["x+iy", "Rx+iRy"], &["(xz, yz)"]),
            Ir::new("E_1b", &["x-iy", "Rx-iRy"], &["(xz, yz)"]),
            Ir::new("E_2a", &[], &["(x2-y2, xy)"]),
            Ir::new("E_2b", &[], &["(x2-y2, xy)"]),
        ],
        cyclic(5, &[0, 1, 4, 2, 3]),
    )
}

// Cnv

pub fn c2v() -> Table {
    CharacterTable::new(
        "C2v",
        &["E", "C2", "σ(xz)", "σ(yz)"],
        &[1, 1, 1, 1],
        vec![
            Ir::new("A1", &["z"], &["x2", "y2", "z2"]),
            Ir::new("A2", &["Rz"], &["xy"]),
            Ir::new("B1", &["x", "Ry"], &["xz"]),
            Ir::new("B2", &["y", "Rx"], &["yz"]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, -1.0, -1.0],
            &[1.0, -1.0, 1.0, -1.0],
            &[1.0, -1.0, -1.0, 1.0],
        ]),
    )
}

pub fn c3v() -> Table {
    CharacterTable::new(
        "C3v",
        &["E", "C3", "σv"],
        &[1, 2, 3],
        vec![
            Ir::new("A1", &["z"], &["x2+y2", "z2"]),
            Ir::new("A2", &["Rz"], &[]),
            Ir::new(
                "E",
                &["(x, y)", "(Rx, Ry)"],
                &["(x2-y2, xy)", "(xz, yz)"],
            ),
        ],
        real(&[&[1.0, 1.0, 1.0], &[1.0, 1.0, -1.0], &[2.0, -1.0, 0.0]]),
    )
}

// Cnh

pub fn c2h() -> Table {
    CharacterTable::new(
        "C2h",
        &["E", "C2", "i", "σh"],
        &[1, 1, 1, 1],
        vec![
            Ir::new("Ag", &["Rz"], &["x2", "y2", "z2", "xy"]),
            Ir::new("Bg", &["Rx", "Ry"], &["xz", "yz"]),
            Ir::new("Au", &["z"], &[]),
            Ir::new("Bu", &["x", "y"], &[]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0],
            &[1.0, -1.0, 1.0, -1.0],
            &[1.0, 1.0, -1.0, -1.0],
            &[1.0, -1.0, -1.0, 1.0],
        ]),
    )
}

// Dn

pub fn d2() -> Table {
    CharacterTable::new(
        "D2",
        &["E", "C2(z)", "C2(y)", "C2(x)"],
        &[1, 1, 1, 1],
        vec![
            Ir::new("A", &[], &["x2", "y2", "z2"]),
            Ir::new("B1", &["z", "Rz"], &["xy"]),
            Ir::new("B2", &["y", "Ry"], &["xz"]),
            Ir::new("B3", &["x", "Rx"], &["yz"]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, -1.0, -1.0],
            &[1.0, -1.0, 1.0, -1.0],
            &[1.0, -1.0, -1.0, 1.0],
        ]),
    )
}

pub fn d3() -> Table {
    CharacterTable::new(
        "D3",
        &["E", "C3", "C'2"],
        &[1, 2, 3],
        vec![
            Ir::new("A1", &[], &["x2+y2", "z2"]),
            Ir::new("A2", &["z", "Rz"], &[]),
            Ir::new(
                "E",
                &["(x, y)", "(Rx, Ry)"],
                &["(x2-y2, xy)", "(xz, yz)"],
            ),
        ],
        real(&[&[1.0, 1.0, 1.0], &[1.0, 1.0, -1.0], &[2.0, -1.0, 0.0]]),
    )
}

// Dnh

pub fn d2h() -> Table {
    CharacterTable::new(
        "D2h",
        &["E", "C2(z)", "C2(y)", "C2(x)", "i", "σ(xy)", "σ(xz)", "σ(yz)"],
        &[1, 1, 1, 1, 1, 1, 1, 1],
        vec![
            Ir::new("Ag", &[], &["x2", "y2", "z2"]),
            Ir::new("B1g", &["Rz"], &["xy"]),
            Ir::new("B2g", &["Ry"], &["xz"]),
            Ir::new("B3g", &["Rx"], &["yz"]),
            Ir::new("Au", &[], &[]),
            Ir::new("B1u", &["z"], &[]),
            Ir::new("B2u", &["y"], &[]),
            Ir::new("B3u", &["x"], &[]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0],
            &[1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0],
            &[1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0],
            &[1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0],
            &[1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0],
            &[1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
        ]),
    )
}

pub fn d3h() -> Table {
    CharacterTable::new(
        "D3h",
        &["E", "C3", "C'2", "σh", "S3", "σv"],
        &[1, 2, 3, 1, 2, 3],
        vec![
            Ir::new("A'1", &[], &["x2+y2", "z2"]),
            Ir::new("A'2", &["Rz"], &[]),
            Ir::new("E'", &["(x, y)"], &["(x2-y2, xy)"]),
            Ir::new("A\"1", &[], &[]),
            Ir::new("A\"2", &["z"], &[]),
            Ir::new("E\"", &["(Rx, Ry)"], &["(xz, yz)"]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
            &[2.0, -1.0, 0.0, 2.0, -1.0, 0.0],
            &[1.0, 1.0, 1.0, -1.0, -1.0, -1.0],
            &[1.0, 1.0, -1.0, -1.0, -1.0, 1.0],
            &[2.0, -1.0, 0.0, -2.0, 1.0, 0.0],
        ]),
    )
}

pub fn d4h() -> Table {
    CharacterTable::new(
        "D4h",
        &["E", "C4", "C2", "C'2", "C\"2", "i", "S4", "σh", "σv", "σd"],
        &[1, 2, 1, 2, 2, 1, 2, 1, 2, 2],
        vec![
            Ir::new("A1g", &[], &["x2+y2", "z2"]),
            Ir::new("A2g", &["Rz"], &[]),
            Ir::new("B1g", &[], &["x2-y2"]),
            Ir::new("B2g", &[], &["xy"]),
            Ir::new("Eg", &["(Rx, Ry)"], &["(xz, yz)"]),
            Ir::new("A1u", &[], &[]),
            Ir::new("A2u", &["z"], &[]),
            Ir::new("B1u", &[], &[]),
            Ir::new("B2u", &[], &[]),
            Ir::new("Eu", &["(x, y)"], &[]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0, -1.0, -1.0],
            &[1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
            &[1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0, -1.0, 1.0],
            &[2.0, 0.0, -2.0, 0.0, 0.0, 2.0, 0.0, -2.0, 0.0, 0.0],
            &[1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0],
            &[1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0],
            &[1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, -1.0, -1.0, 1.0],
            &[1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0],
            &[2.0, 0.0, -2.0, 0.0, 0.0, -2.0, 0.0, 2.0, 0.0, 0.0],
        ]),
    )
}

// Dnd

pub fn d2d() -> Table {
    CharacterTable::new(
        "D2d",
        &["E", "S4", "C2", "C'2", "σd"],
        &[1, 2, 1, 2, 2],
        vec![
            Ir::new("A1", &[], &["x2+y2", "z2"]),
            Ir::new("A2", &["Rz"], &[]),
            Ir::new("B1", &[], &["x2-y2"]),
            Ir::new("B2", &["z"], &["xy"]),
            Ir::new("E", &["(x, y)", "(Rx, Ry)"], &["(xz, yz)"]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0, -1.0, -1.0],
            &[1.0, -1.0, 1.0, 1.0, -1.0],
            &[1.0, -1.0, 1.0, -1.0, 1.0],
            &[2.0, 0.0, -2.0, 0.0, 0.0],
        ]),
    )
}

pub fn d3d() -> Table {
    CharacterTable::new(
        "D3d",
        &["E", "C3", "C'2", "i", "S6", "σd"],
        &[1, 2, 3, 1, 2, 3],
        vec![
            Ir::new("A1g", &[], &["x2+y2", "z2"]),
            Ir::new("A2g", &["Rz"], &[]),
            Ir::new("Eg", &["(Rx, Ry)"], &["(x2-y2, xy)", "(xz, yz)"]),
            Ir::new("A1u", &[], &[]),
            Ir::new("A2u", &["z"], &[]),
            Ir::new("Eu", &["(x, y)"], &[]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
            &[2.0, -1.0, 0.0, 2.0, -1.0, 0.0],
            &[1.0, 1.0, 1.0, -1.0, -1.0, -1.0],
            &[1.0, 1.0, -1.0, -1.0, -1.0, 1.0],
            &[2.0, -1.0, 0.0, -2.0, 1.0, 0.0],
        ]),
    )
}

// cubic and icosahedral

pub fn td() -> Table {
    CharacterTable::new(
        "Td",
        &["E", "C3", "C2", "S4", "σd"],
        &[1, 8, 3, 6, 6],
        vec![
            Ir::new("A1", &[], &["x2+y2+z2"]),
            Ir::new("A2", &[], &[]),
            Ir::new("E", &[], &["(2z2-x2-y2, x2-y2)"]),
            Ir::new("T1", &["(Rx, Ry, Rz)"], &[]),
            Ir::new("T2", &["(x, y, z)"], &["(xy, xz, yz)"]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, 1.0, -1.0, -1.0],
            &[2.0, -1.0, 2.0, 0.0, 0.0],
            &[3.0, 0.0, -1.0, 1.0, -1.0],
            &[3.0, 0.0, -1.0, -1.0, 1.0],
        ]),
    )
}

pub fn oh() -> Table {
    CharacterTable::new(
        "Oh",
        &["E", "C3", "C2", "C4", "C4^2", "i", "S4", "S6", "σh", "σd"],
        &[1, 8, 6, 6, 3, 1, 6, 8, 3, 6],
        vec![
            Ir::new("A1g", &[], &["x2+y2+z2"]),
            Ir::new("A2g", &[], &[]),
            Ir::new("Eg", &[], &["(2z2-x2-y2, x2-y2)"]),
            Ir::new("T1g", &["(Rx, Ry, Rz)"], &[]),
            Ir::new("T2g", &[], &["(xy, xz, yz)"]),
            Ir::new("A1u", &[], &[]),
            Ir::new("A2u", &[], &[]),
            Ir::new("Eu", &[], &[]),
            Ir::new("T1u", &["(x, y, z)"], &[]),
            Ir::new("T2u", &[], &[]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            &[1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
            &[2.0, -1.0, 0.0, 0.0, 2.0, 2.0, 0.0, -1.0, 2.0, 0.0],
            &[3.0, 0.0, -1.0, 1.0, -1.0, 3.0, 1.0, 0.0, -1.0, -1.0],
            &[3.0, 0.0, 1.0, -1.0, -1.0, 3.0, -1.0, 0.0, -1.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0],
            &[1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0],
            &[2.0, -1.0, 0.0, 0.0, 2.0, -2.0, 0.0, 1.0, -2.0, 0.0],
            &[3.0, 0.0, -1.0, 1.0, -1.0, -3.0, -1.0, 0.0, 1.0, 1.0],
            &[3.0, 0.0, 1.0, -1.0, -1.0, -3.0, 1.0, 0.0, 1.0, -1.0],
        ]),
    )
}

pub fn ih() -> Table {
    // the golden ratio and its conjugate, -2cos(4π/5) and -2cos(2π/5)
    let g = (1.0 + 5f64.sqrt()) / 2.0;
    let h = (1.0 - 5f64.sqrt()) / 2.0;
    CharacterTable::new(
        "Ih",
        &["E", "C5", "C5^2", "C3", "C2", "i", "S10", "S10^3", "S6", "σ"],
        &[1, 12, 12, 20, 15, 1, 12, 12, 20, 15],
        vec![
            Ir::new("Ag", &[], &["x2+y2+z2"]),
            Ir::new("T1g", &["(Rx, Ry, Rz)"], &[]),
            Ir::new("T2g", &[], &[]),
            Ir::new("Gg", &[], &[]),
            Ir::new("Hg", &[], &["(2z2-x2-y2, x2-y2, xy, xz, yz)"]),
            Ir::new("Au", &[], &[]),
            Ir::new("T1u", &["(x, y, z)"], &[]),
            Ir::new("T2u", &[], &[]),
            Ir::new("Gu", &[], &[]),
            Ir::new("Hu", &[], &[]),
        ],
        real(&[
            &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            &[3.0, g, h, 0.0, -1.0, 3.0, h, g, 0.0, -1.0],
            &[3.0, h, g, 0.0, -1.0, 3.0, g, h, 0.0, -1.0],
            &[4.0, -1.0, -1.0, 1.0, 0.0, 4.0, -1.0, -1.0, 1.0, 0.0],
            &[5.0, 0.0, 0.0, -1.0, 1.0, 5.0, 0.0, 0.0, -1.0, 1.0],
            &[1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, -1.0],
            &[3.0, g, h, 0.0, -1.0, -3.0, -h, -g, 0.0, 1.0],
            &[3.0, h, g, 0.0, -1.0, -3.0, -g, -h, 0.0, 1.0],
            &[4.0, -1.0, -1.0, 1.0, 0.0, -4.0, 1.0, 1.0, -1.0, 0.0],
            &[5.0, 0.0, 0.0, -1.0, 1.0, -5.0, 0.0, 0.0, 1.0, -1.0],
        ]),
    )
}
