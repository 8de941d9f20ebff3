use assert_cmd::Command;
use insta::assert_snapshot;
use symm::{Registry, Render};
use test_case::test_case;

const ALL: &str = "['C1', 'Ci', 'Cs', 'C2', 'C3', 'C4', 'C5', 'C2v', 'C3v', \
                   'C2h', 'D2', 'D3', 'D2h', 'D3h', 'D4h', 'D2d', 'D3d', 'Td', \
                   'Oh', 'Ih']";

/// run the binary with `args` and return its exit code and stdout
fn pgtable(args: &[&str]) -> (i32, String) {
    let mut cmd = Command::cargo_bin("pgtable").unwrap();
    let assert = cmd.args(args).env_remove("RUST_LOG").assert();
    let output = assert.get_output();
    let code = output.status.code().expect("killed by a signal");
    (code, String::from_utf8(output.stdout.clone()).unwrap())
}

#[test_case(&["--show"]; "long")]
#[test_case(&["-s"]; "short")]
#[test_case(&["-s", "-p", "Zzz", "-l"]; "other flags ignored")]
fn show(args: &[&str]) {
    let (code, out) = pgtable(args);
    assert_eq!(code, 0);
    assert_eq!(out, format!("{ALL}\n"));
}

#[test]
fn every_label() {
    let reg = Registry::standard().unwrap();
    for (label, pg) in reg.iter() {
        let (code, out) = pgtable(&["--pointgroup", label]);
        assert_eq!(code, 0, "{label}");
        assert_eq!(out, format!("{}\n", pg.render_plain()));

        let (code, out) = pgtable(&["--pointgroup", label, "--latex"]);
        assert_eq!(code, 0, "{label}");
        assert_eq!(out, format!("{}\n", pg.render_latex()));
    }
}

#[test]
fn default_is_c1() {
    let (code, out) = pgtable(&[]);
    assert_eq!(code, 0);
    assert_eq!(out, pgtable(&["-p", "C1"]).1);
    assert_snapshot!(out, @r"
    --------------------------------------------------------
    | C1  |  E  |      Lin Rot      |         Quad         |
    --------------------------------------------------------
    |  A  |  1  |x, y, z, Rx, Ry, Rz|x2, y2, z2, xy, xz, yz|
    --------------------------------------------------------
    ");
}

#[test]
fn cs() {
    let (code, out) = pgtable(&["-p", "Cs"]);
    assert_eq!(code, 0);
    assert_snapshot!(out, @r#"
    ---------------------------------------------------------
    | Cs  |  E  | σh  |    Lin Rot     |        Quad        |
    ---------------------------------------------------------
    | A'  |  1  |  1  |    x, y, Rz    |   x2, y2, z2, xy   |
    | A"  |  1  | -1  |   z, Rx, Ry    |       xz, yz       |
    ---------------------------------------------------------
    "#);
}

#[test_case("Zzz")]
#[test_case("c2v"; "case sensitive")]
#[test_case(""; "empty")]
fn missing(label: &str) {
    let (code, out) = pgtable(&["-p", label]);
    assert_eq!(code, 1);
    assert_eq!(
        out,
        format!(
            "Cannot find {label}. It may not be supported yet.\n\
             Currently support point groups:\n\
             {ALL}\n"
        )
    );
}

#[test]
fn bad_flag() {
    let (code, out) = pgtable(&["--bogus"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
}
