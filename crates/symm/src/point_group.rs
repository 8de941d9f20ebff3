use std::{error::Error, fmt::Display};

use nalgebra::DMatrix;

use crate::{
    character::{Character, format_character},
    irrep::Irrep,
};

/// minimum column widths for the plain table
const LABEL_WIDTH: usize = 5;
const CELL_WIDTH: usize = 5;
const LIN_ROT_WIDTH: usize = 16;
const QUAD_WIDTH: usize = 20;

/// column widths inside the LaTeX rows. the header keeps the plain widths
const TEX_LIN_ROT_WIDTH: usize = 12;
const TEX_QUAD_WIDTH: usize = 16;

#[derive(Debug, PartialEq, Eq)]
pub enum TableError {
    /// the character matrix is not irreps × ops
    Shape {
        name: String,
        want: (usize, usize),
        got: (usize, usize),
    },
    /// one class size is needed per operation
    Coefficients {
        name: String,
        ops: usize,
        coeffs: usize,
    },
}

impl Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Shape { name, want, got } => write!(
                f,
                "invalid size for {name}, table shape does not match irreps x \
                 ops: {} x {} != {} x {}",
                got.0, got.1, want.0, want.1
            ),
            TableError::Coefficients { name, ops, coeffs } => write!(
                f,
                "mismatched lengths of coefficients and operations for \
                 {name}: {coeffs} != {ops}"
            ),
        }
    }
}

impl Error for TableError {}

/// the width of a centered column: the widest entry, but at least `min`
fn col_width<'a>(
    min: usize,
    it: impl IntoIterator<Item = &'a String>,
) -> usize {
    it.into_iter().map(|s| s.chars().count()).fold(min, usize::max)
}

/// the character table of a point group
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterTable {
    name: String,

    /// labels of the classes of symmetry operations, like `C2` or `σv`
    ops: Vec<String>,

    /// number of operations in each class
    coeffs: Vec<usize>,

    irreps: Vec<Irrep>,

    /// irreps × ops
    table: DMatrix<Character>,
}

impl CharacterTable {
    pub fn new(
        name: &str,
        ops: &[&str],
        coeffs: &[usize],
        irreps: Vec<Irrep>,
        rows: Vec<Vec<Character>>,
    ) -> Result<Self, TableError> {
        let want = (irreps.len(), ops.len());
        if let Some(bad) = rows.iter().find(|r| r.len() != ops.len()) {
            return Err(TableError::Shape {
                name: name.to_owned(),
                want,
                got: (rows.len(), bad.len()),
            });
        }
        if rows.len() != irreps.len() {
            return Err(TableError::Shape {
                name: name.to_owned(),
                want,
                got: (rows.len(), ops.len()),
            });
        }
        if coeffs.len() != ops.len() {
            return Err(TableError::Coefficients {
                name: name.to_owned(),
                ops: ops.len(),
                coeffs: coeffs.len(),
            });
        }
        let table = DMatrix::from_row_iterator(
            want.0,
            want.1,
            rows.into_iter().flatten(),
        );
        Ok(Self {
            name: name.to_owned(),
            ops: ops.iter().map(|s| s.to_string()).collect(),
            coeffs: coeffs.to_vec(),
            irreps,
            table,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ops(&self) -> &[String] {
        &self.ops
    }

    pub fn coeffs(&self) -> &[usize] {
        &self.coeffs
    }

    pub fn irreps(&self) -> &[Irrep] {
        &self.irreps
    }

    pub fn table(&self) -> &DMatrix<Character> {
        &self.table
    }

    /// the number of symmetry operations in the group
    pub fn order(&self) -> usize {
        self.coeffs.iter().sum()
    }

    /// look up the irrep called `name` along with its characters
    pub fn irrep(&self, name: &str) -> Option<(&Irrep, Vec<Character>)> {
        let idx = self.irreps.iter().position(|i| i.name == name)?;
        let row = self.table.row(idx).iter().copied().collect();
        Some((&self.irreps[idx], row))
    }

    /// iterate over the irreps and their characters, in table order
    pub fn iter(&self) -> impl Iterator<Item = (&Irrep, Vec<Character>)> {
        self.irreps
            .iter()
            .zip(self.table.row_iter())
            .map(|(i, row)| (i, row.iter().copied().collect()))
    }

    /// format every character in the table, row by row
    fn cells(&self) -> Vec<Vec<String>> {
        self.table
            .row_iter()
            .map(|row| row.iter().map(|c| format_character(*c)).collect())
            .collect()
    }

    /// LaTeX `tabular` version of the table
    pub fn latex(&self) -> String {
        use std::fmt::Write;
        let cells = self.cells();
        let mut out = format!(
            "\\begin{{tabular}}{{l{}}}\\hline\n",
            " c".repeat(self.ops.len() + 2)
        );
        write!(out, "{:<LABEL_WIDTH$}&", self.name).unwrap();
        for op in &self.ops {
            let op = op.replace('σ', "{\\sigma}");
            write!(out, "{op:^CELL_WIDTH$}&").unwrap();
        }
        writeln!(
            out,
            "{:^LIN_ROT_WIDTH$}&{:^QUAD_WIDTH$}\\hline",
            "Lin Rot", "Quad"
        )
        .unwrap();
        for (irrep, row) in self.irreps.iter().zip(cells) {
            write!(out, "{:<LABEL_WIDTH$}&", irrep.name).unwrap();
            for c in row {
                write!(out, "{c:^CELL_WIDTH$}&").unwrap();
            }
            writeln!(
                out,
                "{:^TEX_LIN_ROT_WIDTH$}&{:^TEX_QUAD_WIDTH$} \\\\",
                irrep.lin_rot_str(),
                irrep.quad_str()
            )
            .unwrap();
        }
        out.push_str("\\hline\n\\end{tabular}");
        out
    }
}

impl Display for CharacterTable {
    /// write a boxed table. each column is at least as wide as the classic
    /// fixed-width layout and widens to fit its longest entry
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.cells();
        let lin_rots: Vec<_> =
            self.irreps.iter().map(Irrep::lin_rot_str).collect();
        let quads: Vec<_> = self.irreps.iter().map(Irrep::quad_str).collect();

        let lw = col_width(
            LABEL_WIDTH,
            std::iter::once(&self.name)
                .chain(self.irreps.iter().map(|i| &i.name)),
        );
        let cw =
            col_width(CELL_WIDTH, self.ops.iter().chain(cells.iter().flatten()));
        let lrw = col_width(LIN_ROT_WIDTH, &lin_rots);
        let qw = col_width(QUAD_WIDTH, &quads);

        let mut header = format!("|{:^lw$}|", self.name);
        for op in &self.ops {
            header.push_str(&format!("{op:^cw$}|"));
        }
        header.push_str(&format!("{:^lrw$}|{:^qw$}|", "Lin Rot", "Quad"));
        let rule = "-".repeat(header.chars().count());

        writeln!(f, "{rule}")?;
        writeln!(f, "{header}")?;
        writeln!(f, "{rule}")?;
        for (((irrep, row), lr), q) in
            self.irreps.iter().zip(cells).zip(lin_rots).zip(quads)
        {
            write!(f, "|{:^lw$}|", irrep.name)?;
            for c in row {
                write!(f, "{c:^cw$}|")?;
            }
            writeln!(f, "{lr:^lrw$}|{q:^qw$}|")?;
        }
        write!(f, "{rule}")
    }
}
