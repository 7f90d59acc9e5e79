//! Magic constants and the `Format` handle.
//!
//! Offsets and byte values here are what the matchers in [`crate::matchers`] compare
//! against. Multi-byte header fields are checked in both byte orders.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::matchers::{self, Matcher};

/// Shared by Java class files and Mach-O fat binaries.
pub const CAFEBABE_MAGIC: [u8; 4] = [0xCA, 0xFE, 0xBA, 0xBE];

/// Mach-O 32-bit header magic (`MH_MAGIC`).
pub const MACHO_MAGIC_32: u32 = 0xFEED_FACE;

/// Mach-O 64-bit header magic (`MH_MAGIC_64`).
pub const MACHO_MAGIC_64: u32 = 0xFEED_FACF;

/// Shell link header size (0x4C) plus the first bytes of its CLSID.
pub const LNK_MAGIC: [u8; 8] = [0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00];

pub const SWF_MAGICS: [[u8; 3]; 3] = [*b"CWS", *b"FWS", *b"ZWS"];

/// "\0asm".
pub const WASM_MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6D];

/// Valid dBase version/type bytes (offset 0).
pub const DBF_TYPE_CODES: [u8; 22] = [
    0x02, 0x03, 0x04, 0x05, 0x30, 0x31, 0x32, 0x42, 0x62, 0x7B, 0x82, 0x83, 0x87, 0x8A, 0x8B,
    0x8E, 0xB3, 0xCB, 0xE5, 0xF5, 0xF4, 0xFB,
];

pub const MZ_MAGIC: [u8; 2] = *b"MZ";

pub const ELF_MAGIC: [u8; 4] = [0x7F, 0x45, 0x4C, 0x46];

/// Offset of the 16-bit `e_type` field in the ELF header.
pub const ELF_TYPE_OFFSET: usize = 16;
pub const ELF_TYPE_REL: u8 = 1;
pub const ELF_TYPE_EXEC: u8 = 2;
pub const ELF_TYPE_DYN: u8 = 3;
pub const ELF_TYPE_CORE: u8 = 4;

/// DICOM files start with a 128-byte preamble.
pub const DICOM_MAGIC_OFFSET: usize = 128;
pub const DICOM_MAGIC: [u8; 4] = *b"DICM";

/// "NES" followed by MS-DOS end-of-file.
pub const NES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Length of a MARC21 record leader.
pub const MARC_LEADER_LEN: usize = 24;
/// Leader bytes 20..24: the entry map.
pub const MARC_LEADER_TAIL: [u8; 4] = *b"4500";
pub const MARC_FIELD_TERMINATOR: u8 = 0x1E;

pub const TZIF_MAGIC: [u8; 4] = *b"TZif";

/// Longest prefix any matcher inspects at a fixed offset (DICOM).
/// An I/O layer should hand matchers at least this many bytes when the file has them.
pub const PREFIX_LEN: usize = DICOM_MAGIC_OFFSET + DICOM_MAGIC.len();

/// Error returned when parsing a format label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFormatError {
    #[error("unknown format label: {0:?}")]
    Unknown(String),
}

/// One binary format with a signature predicate.
///
/// Variant order carries no priority; ordering candidates is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Format {
    /// Java class file.
    Class,
    /// Mach-O fat binary (the `CAFEBABE` branch of [`Format::MachO`]).
    #[cfg_attr(feature = "serde", serde(rename = "macho-fat"))]
    MachOFat,
    /// Mach-O binary, thin or fat.
    #[cfg_attr(feature = "serde", serde(rename = "macho"))]
    MachO,
    /// Windows shell link.
    Lnk,
    /// Adobe Flash.
    Swf,
    /// WebAssembly binary module.
    Wasm,
    /// dBase table.
    Dbf,
    /// Windows/DOS executable.
    Exe,
    /// Any ELF file.
    Elf,
    /// ELF relocatable object.
    ElfObj,
    /// ELF executable.
    ElfExe,
    /// ELF shared object.
    ElfLib,
    /// ELF core dump.
    ElfDump,
    /// DICOM medical image.
    Dcm,
    /// Nintendo Entertainment System ROM.
    Nes,
    /// MARC21 bibliographic record.
    Marc,
    /// Time Zone Information Format.
    Tzif,
}

impl Format {
    /// Every format, in declaration order.
    pub const ALL: [Format; 17] = [
        Format::Class,
        Format::MachOFat,
        Format::MachO,
        Format::Lnk,
        Format::Swf,
        Format::Wasm,
        Format::Dbf,
        Format::Exe,
        Format::Elf,
        Format::ElfObj,
        Format::ElfExe,
        Format::ElfLib,
        Format::ElfDump,
        Format::Dcm,
        Format::Nes,
        Format::Marc,
        Format::Tzif,
    ];

    /// Stable kebab-case label, e.g. `"elf-obj"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Format::Class => "class",
            Format::MachOFat => "macho-fat",
            Format::MachO => "macho",
            Format::Lnk => "lnk",
            Format::Swf => "swf",
            Format::Wasm => "wasm",
            Format::Dbf => "dbf",
            Format::Exe => "exe",
            Format::Elf => "elf",
            Format::ElfObj => "elf-obj",
            Format::ElfExe => "elf-exe",
            Format::ElfLib => "elf-lib",
            Format::ElfDump => "elf-dump",
            Format::Dcm => "dcm",
            Format::Nes => "nes",
            Format::Marc => "marc",
            Format::Tzif => "tzif",
        }
    }

    /// The predicate for this format.
    #[must_use]
    pub fn matcher(self) -> Matcher {
        match self {
            Format::Class => matchers::class,
            Format::MachOFat => matchers::macho_fat,
            Format::MachO => matchers::macho,
            Format::Lnk => matchers::lnk,
            Format::Swf => matchers::swf,
            Format::Wasm => matchers::wasm,
            Format::Dbf => matchers::dbf,
            Format::Exe => matchers::exe,
            Format::Elf => matchers::elf,
            Format::ElfObj => matchers::elf_obj,
            Format::ElfExe => matchers::elf_exe,
            Format::ElfLib => matchers::elf_lib,
            Format::ElfDump => matchers::elf_dump,
            Format::Dcm => matchers::dcm,
            Format::Nes => matchers::nes,
            Format::Marc => matchers::marc,
            Format::Tzif => matchers::tzif,
        }
    }

    /// Whether `buf` is consistent with this format.
    #[must_use]
    pub fn matches(self, buf: &[u8], size_hint: u32) -> bool {
        (self.matcher())(buf, size_hint)
    }

    /// Shortest buffer this format's predicate can accept.
    #[must_use]
    pub const fn min_len(self) -> usize {
        match self {
            Format::Class | Format::MachOFat => 8,
            Format::MachO => 4,
            Format::Lnk => LNK_MAGIC.len(),
            Format::Swf => 3,
            Format::Wasm => WASM_MAGIC.len(),
            Format::Dbf => 4,
            Format::Exe => MZ_MAGIC.len(),
            Format::Elf => ELF_MAGIC.len(),
            Format::ElfObj | Format::ElfExe | Format::ElfLib | Format::ElfDump => {
                ELF_TYPE_OFFSET + 2
            }
            Format::Dcm => PREFIX_LEN,
            Format::Nes => NES_MAGIC.len(),
            Format::Marc => MARC_LEADER_LEN,
            Format::Tzif => TZIF_MAGIC.len() + 1,
        }
    }

    /// The format whose predicate must also hold for this one to be meaningful.
    ///
    /// ELF subtype predicates only look at `e_type`, so they presuppose [`Format::Elf`].
    #[must_use]
    pub const fn parent(self) -> Option<Format> {
        match self {
            Format::ElfObj | Format::ElfExe | Format::ElfLib | Format::ElfDump => Some(Format::Elf),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFormatError::Unknown(s.to_string()))
    }
}
