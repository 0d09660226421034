//! Reads the faces of a Wavefront OBJ mesh as a simplicial complex.

use std::error::Error;
use std::io::BufRead;
use log::debug;

use crate::SimplicialComplex;

/// Every `f` line becomes a simplex on the vertex indices it lists.
/// For tokens of the form `v/vt/vn` only `v` is used. Indices are taken
/// as they appear in the file; all other lines are ignored.
pub fn read_obj<R>(reader: R) -> Result<SimplicialComplex, Box<dyn Error>>
where R: BufRead {
    let mut c = SimplicialComplex::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();

        if tokens.next() != Some("f") {
            continue
        }

        let vertices = tokens.map(|t| {
            let v = t.split('/').next().unwrap_or(t);
            v.parse::<usize>().map_err(|e|
                format!("line {}: invalid vertex index '{v}': {e}", n + 1)
            )
        }).collect::<Result<Vec<_>, _>>()?;

        if vertices.is_empty() {
            return Err(format!("line {}: face without vertices", n + 1).into())
        }

        c.add_simplex(vertices);
    }

    debug!("read obj: {} simplices, dim: {:?}", c.num_simplices(), c.dim());

    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read() {
        let data = "\
# a square split into two triangles
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
vn 0.0 0.0 1.0

f 1//1 2//1 3//1
f 1/1/1 3/3/1 4/4/1
";
        let c = read_obj(data.as_bytes()).unwrap();
        assert_eq!(c.dim(), Some(2));
        assert_eq!(c.chain_groups().map(|g| g.rank()).collect::<Vec<_>>(), vec![4, 5, 2]);
        assert!(c.get_simplex([1, 3, 4]).is_some());
        assert_eq!(c.euler_char(), 1);
    }

    #[test]
    fn invalid_index() {
        let data = "f 1 2 x\n";
        let e = read_obj(data.as_bytes()).unwrap_err();
        assert!(e.to_string().contains("line 1"));
    }

    #[test]
    fn negative_index() {
        let data = "f -1 -2 -3\n";
        assert!(read_obj(data.as_bytes()).is_err());
    }

    #[test]
    fn empty_face() {
        let data = "v 0 0 0\nf\n";
        assert!(read_obj(data.as_bytes()).is_err());
    }

    #[test]
    fn no_faces() {
        let data = "v 0 0 0\n";
        let c = read_obj(data.as_bytes()).unwrap();
        assert!(c.is_empty());
    }
}
