use crate::udmf::TextMap;
use log::debug;
use std::error::Error;
use std::io::{self, Seek, SeekFrom, Write};
use std::fmt;

/// Size of the `WadHeader` in bytes
pub const HEADER_SIZE: u32 = 12;
/// Size of one `WadDirectory` entry in bytes
pub const DIR_ENTRY_SIZE: u32 = 16;

const PWAD: [u8; 4] = *b"PWAD";
const TEXTMAP: &str = "TEXTMAP";
const ENDMAP: &str = "ENDMAP";

/// Lumps in a UDMF map: marker, TEXTMAP, ENDMAP
const UDMF_LUMP_COUNT: u32 = 3;
/// Where the lump data starts, straight after the directory
pub const UDMF_LUMP_START: u32 = HEADER_SIZE + UDMF_LUMP_COUNT * DIR_ENTRY_SIZE;
/// The size field of the `TEXTMAP` directory entry
const TEXTMAP_SIZE_FIELD: u64 = (HEADER_SIZE + DIR_ENTRY_SIZE + 4) as u64;
/// The offset field of the `ENDMAP` directory entry
const ENDMAP_OFFSET_FIELD: u64 = (HEADER_SIZE + 2 * DIR_ENTRY_SIZE) as u64;

/// Header which tells us the WAD type and where the data is
///
/// The header structure in the WAD is as follows:
///
/// | Field Size | Data Type    | Content                                              |
/// |------------|--------------|------------------------------------------------------|
/// | 0x00-0x03  | 4 ASCII char | *Must* be an ASCII string (either "IWAD" or "PWAD")  |
/// | 0x04-0x07  | unsigned int | The number entries in the directory                  |
/// | 0x08-0x0b  | unsigned int | Offset in bytes to the directory in the WAD file     |
///
pub struct WadHeader {
    /// Will be either `IWAD` for game, or `PWAD` for patch
    wad_type: [u8; 4],
    /// The count of "lumps" of data
    dir_count: u32,
    /// Offset in bytes that the directory starts at
    dir_offset: u32,
}

impl fmt::Debug for WadHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\nWadHeader {{\n  wad_type: {},\n  dir_count: {},\n  dir_offset: {},\n}}",
            String::from_utf8_lossy(&self.wad_type),
            self.dir_count,
            self.dir_offset
        )
    }
}

impl WadHeader {
    fn to_bytes(&self) -> [u8; HEADER_SIZE as usize] {
        let mut b = [0u8; HEADER_SIZE as usize];
        b[0..4].copy_from_slice(&self.wad_type);
        b[4..8].copy_from_slice(&self.dir_count.to_le_bytes());
        b[8..12].copy_from_slice(&self.dir_offset.to_le_bytes());
        b
    }

    pub fn wad_type(&self) -> &[u8; 4] {
        &self.wad_type
    }

    pub fn dir_count(&self) -> u32 {
        self.dir_count
    }

    pub fn dir_offset(&self) -> u32 {
        self.dir_offset
    }
}

/// Contains the details for a lump of data: where it starts, the size of it, and the name
///
/// The directory structure in the WAD is as follows:
///
/// | Field Size | Data Type    | Content                                                    |
/// |------------|--------------|------------------------------------------------------------|
/// | 0x00-0x03  | unsigned int | Offset value to the start of the lump data in the WAD file |
/// | 0x04-0x07  | unsigned int | The size of the lump in bytes                              |
/// | 0x08-0x0f  | 8 ASCII char | ASCII holding the name of the lump                         |
///
pub struct WadDirectory {
    /// The offset in bytes where the lump data starts
    lump_offset: u32,
    /// The size in bytes of the lump referenced
    lump_size: u32,
    /// Name for the lump data
    lump_name: String,
}

impl fmt::Debug for WadDirectory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\nWadDirectory {{\n  lump_name: {},\n  lump_size: {},\n  lump_offset: {},\n}}",
            &self.lump_name, self.lump_size, self.lump_offset
        )
    }
}

impl WadDirectory {
    fn to_bytes(&self) -> io::Result<[u8; DIR_ENTRY_SIZE as usize]> {
        let mut b = [0u8; DIR_ENTRY_SIZE as usize];
        b[0..4].copy_from_slice(&self.lump_offset.to_le_bytes());
        b[4..8].copy_from_slice(&self.lump_size.to_le_bytes());
        b[8..16].copy_from_slice(&lump_name_bytes(&self.lump_name)?);
        Ok(b)
    }

    pub fn lump_offset(&self) -> u32 {
        self.lump_offset
    }

    pub fn lump_size(&self) -> u32 {
        self.lump_size
    }

    pub fn lump_name(&self) -> &str {
        &self.lump_name
    }
}

/// Lump names are up to 8 ASCII chars, NUL padded
fn lump_name_bytes(name: &str) -> io::Result<[u8; 8]> {
    if name.is_empty() || name.len() > 8 || !name.is_ascii() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid lump name: {:?}", name),
        ));
    }
    let mut n = [0u8; 8];
    n[..name.len()].copy_from_slice(name.as_bytes());
    Ok(n)
}

fn patch_u32<W: Write + Seek>(out: &mut W, at: u64, value: u32) -> io::Result<()> {
    out.seek(SeekFrom::Start(at))?;
    out.write_all(&value.to_le_bytes())
}

/// Write a PWAD holding a single UDMF map named `map_name` to `out`, which
/// should be empty and positioned at the start.
///
/// The directory is written first with every lump pointing at the start of the
/// lump data. Once the `TEXTMAP` text is out the two fields that depend on its
/// length are patched in place:
///
/// - `TEXTMAP` size (byte 32) becomes the text length
/// - `ENDMAP` offset (byte 44) becomes the total size, the marker sits at the
///   end of the file
///
/// Neither patch grows the stream. Returns the total number of bytes written,
/// with `out` left positioned at the end.
pub fn write_udmf_map<W: Write + Seek>(
    out: &mut W,
    map_name: &str,
    textmap: &TextMap,
) -> io::Result<u64> {
    let header = WadHeader {
        wad_type: PWAD,
        dir_count: UDMF_LUMP_COUNT,
        dir_offset: HEADER_SIZE,
    };
    out.write_all(&header.to_bytes())?;

    for name in [map_name, TEXTMAP, ENDMAP] {
        let dir = WadDirectory {
            lump_offset: UDMF_LUMP_START,
            lump_size: 0,
            lump_name: name.to_owned(),
        };
        out.write_all(&dir.to_bytes()?)?;
    }

    let text_len = textmap.write_to(out)?;
    let file_size = out.stream_position()?;
    debug!("TEXTMAP is {} bytes, WAD is {} bytes", text_len, file_size);

    // Sizes in the WAD are signed 32 bit
    let total = u32::try_from(file_size)
        .ok()
        .filter(|s| *s <= i32::MAX as u32)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("WAD of {} bytes is too large", file_size),
            )
        })?;

    patch_u32(out, ENDMAP_OFFSET_FIELD, total)?;
    patch_u32(out, TEXTMAP_SIZE_FIELD, total - UDMF_LUMP_START)?;
    out.seek(SeekFrom::End(0))?;

    Ok(file_size)
}

#[derive(Debug, PartialEq, Eq)]
pub enum WadError {
    /// Fewer bytes than the header or directory claims
    Truncated(usize),
    /// The first four bytes are not `IWAD` or `PWAD`
    NotAWad([u8; 4]),
    /// A directory entry points outside the file
    LumpOutOfBounds(String),
}

impl Error for WadError {}

impl fmt::Display for WadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WadError::Truncated(len) => write!(f, "WAD truncated at {} bytes", len),
            WadError::NotAWad(t) => write!(f, "Not a WAD, type {:?}", String::from_utf8_lossy(t)),
            WadError::LumpOutOfBounds(name) => write!(f, "Lump {} is out of bounds", name),
        }
    }
}

/// "Where's All (the) Data": contains the WAD in memory, plus an array of directories
/// telling us where each data lump starts
pub struct WadData {
    /// The WAD as an array of bytes read in to memory
    wad_data: Vec<u8>,
    header: WadHeader,
    /// Tells us where each lump of data is
    wad_dirs: Vec<WadDirectory>,
}

impl fmt::Debug for WadData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\nWadData {{\n  header: {:?},\n  wad_dirs: {:?},\n}}",
            self.header, self.wad_dirs
        )
    }
}

impl WadData {
    pub fn from_bytes(wad_data: Vec<u8>) -> Result<WadData, WadError> {
        let header = read_header(&wad_data)?;
        if &header.wad_type != b"IWAD" && header.wad_type != PWAD {
            return Err(WadError::NotAWad(header.wad_type));
        }

        // The whole directory has to be in the file before trusting its count
        let dir_end = (header.dir_count as usize)
            .checked_mul(DIR_ENTRY_SIZE as usize)
            .and_then(|size| size.checked_add(header.dir_offset as usize))
            .filter(|end| *end <= wad_data.len())
            .ok_or(WadError::Truncated(wad_data.len()))?;
        debug!("WAD directory ends at {}", dir_end);

        let mut wad_dirs = Vec::with_capacity(header.dir_count as usize);
        for i in 0..header.dir_count as usize {
            let offset = header.dir_offset as usize + i * DIR_ENTRY_SIZE as usize;
            let dir = read_dir_data(&wad_data, offset)?;
            let end = dir.lump_offset as usize + dir.lump_size as usize;
            if end > wad_data.len() {
                return Err(WadError::LumpOutOfBounds(dir.lump_name));
            }
            wad_dirs.push(dir);
        }

        Ok(WadData {
            wad_data,
            header,
            wad_dirs,
        })
    }

    pub fn header(&self) -> &WadHeader {
        &self.header
    }

    pub fn directories(&self) -> &[WadDirectory] {
        &self.wad_dirs
    }

    /// The bytes of the first lump called `name`
    pub fn lump(&self, name: &str) -> Option<&[u8]> {
        self.wad_dirs
            .iter()
            .find(|dir| dir.lump_name == name)
            .map(|dir| {
                let start = dir.lump_offset as usize;
                &self.wad_data[start..start + dir.lump_size as usize]
            })
    }
}

fn read_4_bytes(data: &[u8], offset: usize) -> Result<u32, WadError> {
    data.get(offset..offset + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or(WadError::Truncated(data.len()))
}

fn read_header(data: &[u8]) -> Result<WadHeader, WadError> {
    let mut t = [0u8; 4];
    t.copy_from_slice(data.get(0..4).ok_or(WadError::Truncated(data.len()))?);

    Ok(WadHeader {
        wad_type: t,
        dir_count: read_4_bytes(data, 4)?,
        dir_offset: read_4_bytes(data, 8)?,
    })
}

fn read_dir_data(data: &[u8], offset: usize) -> Result<WadDirectory, WadError> {
    let n = data
        .get(offset + 8..offset + 16)
        .ok_or(WadError::Truncated(data.len()))?;

    Ok(WadDirectory {
        lump_offset: read_4_bytes(data, offset)?,
        lump_size: read_4_bytes(data, offset + 4)?,
        lump_name: String::from_utf8_lossy(n)
            .trim_end_matches('\u{0}') // better to address this early to avoid many casts later
            .to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::udmf::{UdmfLineDef, UdmfSector, UdmfSideDef, UdmfVertex};
    use std::io::Cursor;

    fn small_map() -> TextMap {
        TextMap {
            vertexes: vec![UdmfVertex::new(0, 0), UdmfVertex::new(0, 64)],
            linedefs: vec![UdmfLineDef::new(0, 1, 0)],
            sidedefs: vec![UdmfSideDef::new(0, "STARTAN1")],
            sectors: vec![UdmfSector::new(0, 144, "FLOOR0_1", "F_SKY1", 192)],
            ..TextMap::default()
        }
    }

    fn le_u32(b: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(b[at..at + 4].try_into().unwrap())
    }

    #[test]
    fn header_and_directory_layout() {
        let mut out = Cursor::new(Vec::new());
        write_udmf_map(&mut out, "MAP01", &small_map()).unwrap();
        let b = out.into_inner();

        assert_eq!(&b[0..4], b"PWAD");
        assert_eq!(le_u32(&b, 4), 3);
        assert_eq!(le_u32(&b, 8), 12);

        assert_eq!(le_u32(&b, 12), 60);
        assert_eq!(le_u32(&b, 16), 0);
        assert_eq!(&b[20..28], b"MAP01\0\0\0");

        assert_eq!(le_u32(&b, 28), 60);
        assert_eq!(&b[36..44], b"TEXTMAP\0");

        assert_eq!(le_u32(&b, 48), 0);
        assert_eq!(&b[52..60], b"ENDMAP\0\0");

        assert!(b[60..].starts_with(b"namespace = \"zdoom\";\n"));
    }

    #[test]
    fn patched_sizes_match_stream() {
        let map = small_map();
        let mut out = Cursor::new(Vec::new());
        let written = write_udmf_map(&mut out, "MAP01", &map).unwrap();
        assert_eq!(out.position(), written);

        let b = out.into_inner();
        assert_eq!(written, b.len() as u64);
        assert_eq!(le_u32(&b, 44) as usize, b.len());
        assert_eq!(le_u32(&b, 32) as usize, b.len() - 60);
        assert_eq!(&b[60..], map.to_string().as_bytes());
    }

    #[test]
    fn read_back() {
        let map = small_map();
        let mut out = Cursor::new(Vec::new());
        write_udmf_map(&mut out, "MAP07", &map).unwrap();

        let wad = WadData::from_bytes(out.into_inner()).unwrap();
        assert_eq!(wad.header().wad_type(), b"PWAD");
        assert_eq!(wad.header().dir_count(), 3);
        let names: Vec<&str> = wad.directories().iter().map(|d| d.lump_name()).collect();
        assert_eq!(names, ["MAP07", "TEXTMAP", "ENDMAP"]);

        assert_eq!(wad.lump("MAP07"), Some(&[][..]));
        assert_eq!(wad.lump("TEXTMAP"), Some(map.to_string().as_bytes()));
        assert_eq!(wad.lump("ENDMAP"), Some(&[][..]));
        assert_eq!(wad.lump("THINGS"), None);
    }

    #[test]
    fn bad_lump_name() {
        let mut out = Cursor::new(Vec::new());
        let err = write_udmf_map(&mut out, "MAPNAMETOOLONG", &small_map()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn not_a_wad() {
        let err = WadData::from_bytes(b"JUNKJUNKJUNKJUNK".to_vec()).unwrap_err();
        assert_eq!(err, WadError::NotAWad(*b"JUNK"));
        let err = WadData::from_bytes(b"PWAD".to_vec()).unwrap_err();
        assert_eq!(err, WadError::Truncated(4));
    }

    #[test]
    fn directory_larger_than_file() {
        let mut b = b"PWAD".to_vec();
        b.extend_from_slice(&u32::MAX.to_le_bytes());
        b.extend_from_slice(&12u32.to_le_bytes());
        let err = WadData::from_bytes(b).unwrap_err();
        assert_eq!(err, WadError::Truncated(12));

        // Two entries claimed, only one present
        let mut out = Cursor::new(Vec::new());
        write_udmf_map(&mut out, "MAP01", &small_map()).unwrap();
        let mut b = out.into_inner();
        b[4..8].copy_from_slice(&2u32.to_le_bytes());
        let len = b.len() as u32;
        b[8..12].copy_from_slice(&(len - 16).to_le_bytes());
        let len = b.len();
        assert_eq!(WadData::from_bytes(b).unwrap_err(), WadError::Truncated(len));
    }
}
