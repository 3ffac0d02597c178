use anyhow::{anyhow, bail, Context, Result};
use glam::Vec3;
use nom::{
    bytes::complete::{tag_no_case, take},
    character::complete::{multispace0, multispace1, not_line_ending},
    multi::{count, many0},
    number::complete::{float, le_f32, le_u16, le_u32},
    sequence::preceded,
    IResult,
};
use std::path::Path;

use crate::types::Triangle;

const BINARY_HEADER_LEN: usize = 80;
const BINARY_FACET_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlFormat {
    Binary,
    Ascii,
}

/// Triangle soup read from an STL file, in file order
#[derive(Debug, Clone)]
pub struct StlMesh {
    pub format: StlFormat,
    pub triangles: Vec<Triangle>,
}

/// Reads and parses an STL file from disk
pub fn load_stl_file(path: impl AsRef<Path>) -> Result<StlMesh> {
    let path = path.as_ref();
    log::info!("Loading STL file: {:?}", path);

    let data = std::fs::read(path).context(format!("Failed to read STL file: {:?}", path))?;
    let mesh = parse_stl(&data).context(format!("Failed to parse STL file: {:?}", path))?;

    log::info!(
        "Loaded {:?} STL with {} triangles",
        mesh.format,
        mesh.triangles.len()
    );
    Ok(mesh)
}

/// Detect and parse STL data (binary or ASCII)
///
/// Binary files may also start with "solid", so a header whose declared
/// facet count matches the data length wins over the ASCII keyword. Data
/// that starts with "solid" (any case) but does not parse as ASCII is
/// retried as binary; the ASCII error is reported when both fail.
pub fn parse_stl(data: &[u8]) -> Result<StlMesh> {
    if looks_like_binary(data) || !starts_with_solid(data) {
        return parse_binary_stl(data);
    }

    let ascii = std::str::from_utf8(data)
        .context("ASCII STL is not valid UTF-8")
        .and_then(parse_ascii_stl);
    match ascii {
        Ok(mesh) => Ok(mesh),
        Err(ascii_err) => parse_binary_stl(data).map_err(|binary_err| {
            log::debug!("Binary fallback failed: {}", binary_err);
            ascii_err
        }),
    }
}

fn starts_with_solid(data: &[u8]) -> bool {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    let rest = &data[start..];
    rest.len() >= 5 && rest[..5].eq_ignore_ascii_case(b"solid")
}

fn looks_like_binary(data: &[u8]) -> bool {
    if data.len() < BINARY_HEADER_LEN + 4 {
        return false;
    }
    let declared = u32::from_le_bytes([data[80], data[81], data[82], data[83]]) as usize;
    declared
        .checked_mul(BINARY_FACET_LEN)
        .and_then(|body| body.checked_add(BINARY_HEADER_LEN + 4))
        .is_some_and(|expected| expected == data.len())
}

/// Parse a binary STL buffer
pub fn parse_binary_stl(data: &[u8]) -> Result<StlMesh> {
    if data.len() < BINARY_HEADER_LEN + 4 {
        bail!("File too small to be a valid STL ({} bytes)", data.len());
    }

    let (_, triangles) = binary_body(data).map_err(|e| match e {
        nom::Err::Incomplete(_) => anyhow!("Unexpected end of binary STL"),
        nom::Err::Error(e) | nom::Err::Failure(e) => anyhow!(
            "Unexpected end of binary STL at byte {}",
            data.len() - e.input.len()
        ),
    })?;

    Ok(StlMesh {
        format: StlFormat::Binary,
        triangles,
    })
}

fn binary_body(input: &[u8]) -> IResult<&[u8], Vec<Triangle>> {
    let (input, _header) = take(BINARY_HEADER_LEN)(input)?;
    let (input, facet_count) = le_u32(input)?;
    count(binary_facet, facet_count as usize)(input)
}

fn binary_facet(input: &[u8]) -> IResult<&[u8], Triangle> {
    // The stored normal is ignored; colors are derived from the vertices
    let (input, _normal) = binary_vec3(input)?;
    let (input, a) = binary_vec3(input)?;
    let (input, b) = binary_vec3(input)?;
    let (input, c) = binary_vec3(input)?;
    let (input, _attribute_bytes) = le_u16(input)?;
    Ok((input, Triangle::new(a, b, c)))
}

fn binary_vec3(input: &[u8]) -> IResult<&[u8], Vec3> {
    let (input, x) = le_f32(input)?;
    let (input, y) = le_f32(input)?;
    let (input, z) = le_f32(input)?;
    Ok((input, Vec3::new(x, y, z)))
}

/// Parse an ASCII STL document
pub fn parse_ascii_stl(text: &str) -> Result<StlMesh> {
    let (_, triangles) = ascii_solid(text).map_err(|e| match e {
        nom::Err::Incomplete(_) => anyhow!("Unexpected end of ASCII STL"),
        nom::Err::Error(e) | nom::Err::Failure(e) => anyhow!(
            "Malformed ASCII STL near byte {}",
            text.len() - e.input.len()
        ),
    })?;

    Ok(StlMesh {
        format: StlFormat::Ascii,
        triangles,
    })
}

fn ascii_solid(input: &str) -> IResult<&str, Vec<Triangle>> {
    let (input, _) = preceded(multispace0, tag_no_case("solid"))(input)?;
    let (input, _name) = not_line_ending(input)?;
    let (input, triangles) = many0(ascii_facet)(input)?;
    let (input, _) = preceded(multispace0, tag_no_case("endsolid"))(input)?;
    Ok((input, triangles))
}

fn ascii_facet(input: &str) -> IResult<&str, Triangle> {
    let (input, _) = preceded(multispace0, tag_no_case("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag_no_case("normal"))(input)?;
    let (input, _normal) = ascii_vec3(input)?;
    let (input, _) = preceded(multispace0, tag_no_case("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag_no_case("loop"))(input)?;
    let (input, a) = ascii_vertex(input)?;
    let (input, b) = ascii_vertex(input)?;
    let (input, c) = ascii_vertex(input)?;
    let (input, _) = preceded(multispace0, tag_no_case("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag_no_case("endfacet"))(input)?;
    Ok((input, Triangle::new(a, b, c)))
}

fn ascii_vertex(input: &str) -> IResult<&str, Vec3> {
    let (input, _) = preceded(multispace0, tag_no_case("vertex"))(input)?;
    ascii_vec3(input)
}

fn ascii_vec3(input: &str) -> IResult<&str, Vec3> {
    let (input, x) = preceded(multispace1, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, z) = preceded(multispace1, float)(input)?;
    Ok((input, Vec3::new(x, y, z)))
}
