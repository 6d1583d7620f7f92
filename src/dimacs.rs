use std::fs;

use log::warn;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::map_res;
use nom::sequence::{preceded, separated_pair, terminated, tuple};

use crate::color::ColoringInstance;
use crate::error::{ColorError, Result};
use crate::graph::Graph;


/// reads a graph from a DIMACS string (comment lines, `p edge N M` header, `e U V` edges)
pub fn read_from_str(s: &str) -> Result<Graph> {
    let mut graph: Option<Graph> = None;
    let mut declared_m = 0;
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        let lineno = i + 1;
        if line.starts_with('p') {
            if graph.is_some() {
                return Err(ColorError::parse(format!("line {}: second header", lineno)));
            }
            let (n, m) = complete_line(read_header(line), lineno)?;
            graph = Some(Graph::new(n));
            declared_m = m;
        } else if line.starts_with('e') {
            let g = graph.as_mut().ok_or_else(|| {
                ColorError::parse(format!("line {}: edge before the header", lineno))
            })?;
            let (a, b) = complete_line(read_edge(line), lineno)?;
            let n = g.nb_vertices();
            if a == 0 || b == 0 || a > n || b > n {
                return Err(ColorError::parse(format!(
                    "line {}: edge ({},{}) out of range (vertices are numbered 1..{})", lineno, a, b, n
                )));
            }
            if a == b {
                return Err(ColorError::parse(format!("line {}: self-loop on {}", lineno, a)));
            }
            if !g.are_adjacent(a-1, b-1) { // edges may be listed in both directions
                g.add_edge(a-1, b-1)?;
            }
        } else {
            return Err(ColorError::parse(format!("line {}: unexpected '{}'", lineno, line)));
        }
    }
    let g = graph.ok_or_else(|| ColorError::parse("missing 'p edge' header"))?;
    if g.nb_edges() != declared_m && 2*g.nb_edges() != declared_m {
        warn!("DIMACS header declares {} edges, read {}", declared_m, g.nb_edges());
    }
    Ok(g)
}

/// reads a graph from a DIMACS file
pub fn read_from_file(filename: &str) -> Result<Graph> {
    let s = fs::read_to_string(filename)?.replace('\r', "");
    read_from_str(&s)
}

/// DIMACS encoding of the graph (vertex ids shifted to start at 1)
pub fn to_dimacs_string(graph: &Graph) -> String {
    let mut res = format!("p edge {} {}\n", graph.nb_vertices(), graph.nb_edges());
    for (u, v) in graph.edges() {
        res += format!("e {} {}\n", u+1, v+1).as_str();
    }
    res
}

/// writes the graph into a DIMACS file
pub fn write_dimacs_file(graph: &Graph, filename: &str) -> Result<()> {
    fs::write(filename, to_dimacs_string(graph))?;
    Ok(())
}

fn complete_line<T>(res: IResult<&str, T>, lineno: usize) -> Result<T> {
    match res {
        Ok(("", v)) => Ok(v),
        Ok((rest, _)) => Err(ColorError::parse(format!("line {}: trailing '{}'", lineno, rest))),
        Err(e) => Err(ColorError::parse(format!("line {}: {}", lineno, e))),
    }
}

fn integer(s: &str) -> IResult<&str, usize> {
    map_res(digit1, |d: &str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s: &str) -> IResult<&str, (usize, usize)> {
    terminated(separated_pair(integer, space1, integer), space0)(s)
}

/// reads header containing (n,m)
pub fn read_header(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(
        tuple((tag("p"), space1, alt((tag("edge"), tag("col"))), space1)),
        read_two_integers
    )(s)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s: &str) -> IResult<&str, (usize, usize)> {
    preceded(tuple((tag("e"), space1)), read_two_integers)(s)
}
