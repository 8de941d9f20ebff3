use approx::assert_abs_diff_eq;
use insta::assert_snapshot;
use test_case::test_case;

use crate::{
    Character, Irrep, Registry, TableError, character::re,
    point_group::CharacterTable, tables,
};

#[test]
fn c2v_plain() {
    let got = tables::c2v().unwrap().to_string();
    assert_snapshot!(got, @r#"
---------------------------------------------------------------------
| C2v |  E  | C2  |σ(xz)|σ(yz)|    Lin Rot     |        Quad        |
---------------------------------------------------------------------
| A1  |  1  |  1  |  1  |  1  |       z        |     x2, y2, z2     |
| A2  |  1  |  1  | -1  | -1  |       Rz       |         xy         |
| B1  |  1  | -1  |  1  | -1  |     x, Ry      |         xz         |
| B2  |  1  | -1  | -1  |  1  |     y, Rx      |         yz         |
---------------------------------------------------------------------
"#);
}

#[test]
fn cs_plain() {
    let got = tables::cs().unwrap().to_string();
    assert_snapshot!(got, @r#"
---------------------------------------------------------
| Cs  |  E  | σh  |    Lin Rot     |        Quad        |
---------------------------------------------------------
| A'  |  1  |  1  |    x, y, Rz    |   x2, y2, z2, xy   |
| A"  |  1  | -1  |   z, Rx, Ry    |       xz, yz       |
---------------------------------------------------------
"#);
}

#[test]
fn c3_plain() {
    // the complex characters widen every operation column
    let got = tables::c3().unwrap().to_string();
    assert_snapshot!(got, @r#"
-------------------------------------------------------------------------------------------
| C3  |      E       |      C3      |     C3^2     |    Lin Rot     |        Quad         |
-------------------------------------------------------------------------------------------
|  A  |      1       |      1       |      1       |     z, Rz      |      x2+y2, z2      |
| E_a |      1       |-0.5+0.866025i|-0.5-0.866025i|  x+iy, Rx+iRy  |(x2-y2, xy), (xz, yz)|
| E_b |      1       |-0.5-0.866025i|-0.5+0.866025i|  x-iy, Rx-iRy  |(x2-y2, xy), (xz, yz)|
-------------------------------------------------------------------------------------------
"#);
}

#[test]
fn d3h_latex() {
    let got = tables::d3h().unwrap().latex();
    assert_snapshot!(got, @r#"
\begin{tabular}{l c c c c c c c c}\hline
D3h  &  E  & C3  & C'2 &{\sigma}h& S3  &{\sigma}v&    Lin Rot     &        Quad        \hline
A'1  &  1  &  1  &  1  &  1  &  1  &  1  &            &   x2+y2, z2     \\
A'2  &  1  &  1  & -1  &  1  &  1  & -1  &     Rz     &                 \\
E'   &  2  & -1  &  0  &  2  & -1  &  0  &   (x, y)   &  (x2-y2, xy)    \\
A"1  &  1  &  1  &  1  & -1  & -1  & -1  &            &                 \\
A"2  &  1  &  1  & -1  & -1  & -1  &  1  &     z      &                 \\
E"   &  2  & -1  &  0  & -2  &  1  &  0  &  (Rx, Ry)  &    (xz, yz)     \\
\hline
\end{tabular}
"#);
}

#[test]
fn cs_latex() {
    let got = tables::cs().unwrap().latex();
    assert_snapshot!(got, @r#"
\begin{tabular}{l c c c c}\hline
Cs   &  E  &{\sigma}h&    Lin Rot     &        Quad        \hline
A'   &  1  &  1  &  x, y, Rz  & x2, y2, z2, xy  \\
A"   &  1  & -1  & z, Rx, Ry  &     xz, yz      \\
\hline
\end{tabular}
"#);
}

#[test_case("C1", 1)]
#[test_case("C2", 2)]
#[test_case("C3v", 6)]
#[test_case("D2h", 8)]
#[test_case("D4h", 16)]
#[test_case("Td", 24)]
#[test_case("Oh", 48)]
#[test_case("Ih", 120)]
fn order(label: &str, want: usize) {
    let reg = Registry::standard().unwrap();
    assert_eq!(reg.get(label).unwrap().order(), want);
}

/// (1/h) Σ g χᵢ χⱼ* = δᵢⱼ for every pair of rows in every table. the
/// conjugate takes care of the split pairs in the cyclic groups
#[test]
fn orthogonality() {
    let reg = Registry::standard().unwrap();
    for (label, pg) in reg.iter() {
        let h = pg.order() as f64;
        let t = pg.table();
        for i in 0..t.nrows() {
            for j in 0..t.nrows() {
                let got: Character = t
                    .row(i)
                    .iter()
                    .zip(t.row(j).iter())
                    .zip(pg.coeffs())
                    .map(|((a, b), &g)| a * b.conj() * g as f64)
                    .sum::<Character>()
                    / h;
                let want = re(if i == j { 1.0 } else { 0.0 });
                assert!(
                    (got - want).norm() < 1e-10,
                    "{label}: <{}|{}> = {got}",
                    pg.irreps()[i],
                    pg.irreps()[j],
                );
            }
        }
    }
}

/// the identity column holds the dimension of each irrep, and the squared
/// dimensions add up to the order of the group
#[test]
fn dimensions() {
    let reg = Registry::standard().unwrap();
    for (label, pg) in reg.iter() {
        let mut sum = 0.0;
        for (irrep, row) in pg.iter() {
            let dim = row[0].re;
            sum += dim * dim;
            if !irrep.is_split() {
                assert_abs_diff_eq!(
                    dim,
                    irrep.degeneracy() as f64,
                    epsilon = 1e-12
                );
            }
        }
        assert_abs_diff_eq!(sum, pg.order() as f64, epsilon = 1e-10);
        assert_eq!(pg.name(), label);
    }
}

#[test]
fn lookup_irrep() {
    let pg = tables::d3d().unwrap();
    let (irrep, row) = pg.irrep("Eg").unwrap();
    assert_eq!(irrep.lin_rot_str(), "(Rx, Ry)");
    assert_eq!(irrep.quad_str(), "(x2-y2, xy), (xz, yz)");
    let want: Vec<_> =
        [2.0, -1.0, 0.0, 2.0, -1.0, 0.0].into_iter().map(re).collect();
    assert_eq!(row, want);
    assert!(pg.irrep("T1g").is_none());
}

#[test]
fn renderings_differ() {
    let reg = Registry::standard().unwrap();
    for (_, pg) in reg.iter() {
        let plain = pg.to_string();
        let latex = pg.latex();
        assert!(!plain.is_empty());
        assert!(latex.starts_with("\\begin{tabular}"));
        assert!(latex.ends_with("\\end{tabular}"));
        assert_ne!(plain, latex);
    }
}

#[test]
fn bad_shape() {
    let got = CharacterTable::new(
        "C2",
        &["E", "C2"],
        &[1, 1],
        vec![Irrep::new("A", &[], &[]), Irrep::new("B", &[], &[])],
        vec![vec![re(1.0), re(1.0)], vec![re(1.0)]],
    );
    assert_eq!(
        got,
        Err(TableError::Shape {
            name: "C2".to_owned(),
            want: (2, 2),
            got: (2, 1),
        })
    );

    let got = CharacterTable::new(
        "C2",
        &["E", "C2"],
        &[1, 1],
        vec![Irrep::new("A", &[], &[])],
        vec![vec![re(1.0), re(1.0)], vec![re(1.0), re(-1.0)]],
    );
    assert_eq!(
        got,
        Err(TableError::Shape {
            name: "C2".to_owned(),
            want: (1, 2),
            got: (2, 2),
        })
    );
}

#[test]
fn bad_coeffs() {
    let got = CharacterTable::new(
        "C1",
        &["E"],
        &[1, 1],
        vec![Irrep::new("A", &[], &[])],
        vec![vec![re(1.0)]],
    );
    let Err(e) = got else {
        panic!("expected an error");
    };
    assert_eq!(
        e.to_string(),
        "mismatched lengths of coefficients and operations for C1: 2 != 1"
    );
}
