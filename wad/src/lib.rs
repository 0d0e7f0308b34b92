//! This crate contains the structures and tools for writing (and reading back)
//! UDMF maps packed in to a PWAD.
//!
//! The structure of a WAD is this:
//!
//! ```text,ignore
//!                        <───── 32 bits ──────>
//!                        ┌────────────────────┐
//!             ┌──── 0x00 |  ASCII WAD Type    | 0x03
//!             |          | ────────────────── |
//!     Header ─┤     0x04 | # of directories   | 0x07
//!             |          | ────────────────── |
//!             └──── 0x08 | offset to listing ───0x0B ──┐
//!             ┌───────── | ────────────────── |        |
//!             |     0x0C | ┌────────────────┐<────────┘
//!             |          | |   Lump Offset  |──────┐
//!  Directory ─┤          | |----------------| |    |
//!     List    |          | |   Lump Size    | |    |
//!             |          | |----------------| |    |
//!             |          | |   Lump Name    | |    |
//!             |          | └────────────────┘ |    |
//!             └───────── |         .          |    |
//!             ┌───────── | ┌────────────────┐ |    |
//!             |          | |   Lump Bytes   |<─────┘
//!     Lumps ──┤          | |       .        | |
//!             |          | └────────────────┘ |
//!             └───────── └────────────────────┘
//! ```
//!
//! A UDMF map is three directory entries: the map marker (`MAP01`), the
//! `TEXTMAP` lump holding the map as text, and `ENDMAP`. Only `TEXTMAP` carries
//! any bytes. Because the directory sits in front of the lump data the writer
//! has to come back and patch sizes in once the text is out, see
//! [`write_udmf_map`].

/// The WAD container writer and reader
pub mod wad;

/// The textual UDMF records that make up a `TEXTMAP` lump
pub mod udmf;

pub use crate::udmf::*;
pub use crate::wad::*;
