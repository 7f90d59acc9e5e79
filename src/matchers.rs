//! Signature predicates: one function per binary format.
//!
//! Every matcher has the same shape, `fn(&[u8], u32) -> bool`. The second argument
//! is the total file size when known; none of the formats here need it. A buffer too
//! short to inspect is never a match. No matcher indexes past the end of its input.

use crate::format::{
    CAFEBABE_MAGIC, DBF_TYPE_CODES, DICOM_MAGIC, DICOM_MAGIC_OFFSET, ELF_MAGIC, ELF_TYPE_CORE,
    ELF_TYPE_DYN, ELF_TYPE_EXEC, ELF_TYPE_OFFSET, ELF_TYPE_REL, LNK_MAGIC, MACHO_MAGIC_32,
    MACHO_MAGIC_64, MARC_FIELD_TERMINATOR, MARC_LEADER_LEN, MARC_LEADER_TAIL, MZ_MAGIC,
    NES_MAGIC, SWF_MAGICS, TZIF_MAGIC, WASM_MAGIC,
};

/// Uniform matcher signature: `(prefix, size_hint) -> verdict`.
pub type Matcher = fn(&[u8], u32) -> bool;

/// Java class files and Mach-O fat binaries share `CA FE BA BE`; byte 7 tells them apart,
/// so both need at least 8 bytes.
fn class_or_macho_fat(buf: &[u8]) -> bool {
    buf.len() >= 8 && buf.starts_with(&CAFEBABE_MAGIC)
}

/// Java class file. Byte 7 is the low byte of the major version.
pub fn class(buf: &[u8], _size_hint: u32) -> bool {
    class_or_macho_fat(buf) && buf[7] > 30
}

/// Mach-O fat (universal) binary. Byte 7 is the low byte of the architecture count.
///
/// Values of byte 7 in `20..=30` match neither this nor [`class`].
pub fn macho_fat(buf: &[u8], _size_hint: u32) -> bool {
    class_or_macho_fat(buf) && buf[7] < 20
}

/// Mach-O binary: fat header, or a thin 32/64-bit header in either byte order.
pub fn macho(buf: &[u8], size_hint: u32) -> bool {
    if macho_fat(buf, size_hint) {
        return true;
    }

    let Some(head) = buf.first_chunk::<4>() else {
        return false;
    };
    let be = u32::from_be_bytes(*head);
    let le = u32::from_le_bytes(*head);

    be == MACHO_MAGIC_32 || le == MACHO_MAGIC_32 || be == MACHO_MAGIC_64 || le == MACHO_MAGIC_64
}

/// Windows shell link (.lnk): header size 0x4C followed by the start of the link CLSID.
pub fn lnk(buf: &[u8], _size_hint: u32) -> bool {
    buf.starts_with(&LNK_MAGIC)
}

/// Adobe Flash: uncompressed (`FWS`), zlib (`CWS`) or LZMA (`ZWS`).
pub fn swf(buf: &[u8], _size_hint: u32) -> bool {
    SWF_MAGICS.iter().any(|magic| buf.starts_with(magic))
}

pub fn wasm(buf: &[u8], _size_hint: u32) -> bool {
    buf.starts_with(&WASM_MAGIC)
}

/// dBase table. There is no magic; the version byte must be a known type code and
/// bytes 2..4 must form a plausible last-update month and day.
pub fn dbf(buf: &[u8], _size_hint: u32) -> bool {
    let Some(&[kind, _year, month, day]) = buf.first_chunk::<4>() else {
        return false;
    };

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return false;
    }

    DBF_TYPE_CODES.contains(&kind)
}

/// Windows/DOS executable (`MZ`).
pub fn exe(buf: &[u8], _size_hint: u32) -> bool {
    buf.starts_with(&MZ_MAGIC)
}

pub fn elf(buf: &[u8], _size_hint: u32) -> bool {
    buf.starts_with(&ELF_MAGIC)
}

/// `e_type` at offset 16 equals `value` in either byte order.
fn elf_type_is(buf: &[u8], value: u8) -> bool {
    match buf.get(ELF_TYPE_OFFSET..ELF_TYPE_OFFSET + 2) {
        Some(&[lo, hi]) => (lo == value && hi == 0) || (lo == 0 && hi == value),
        _ => false,
    }
}

/// ELF relocatable object. Only the `e_type` field is checked; pair with [`elf`].
pub fn elf_obj(buf: &[u8], _size_hint: u32) -> bool {
    elf_type_is(buf, ELF_TYPE_REL)
}

/// ELF executable. Only the `e_type` field is checked; pair with [`elf`].
pub fn elf_exe(buf: &[u8], _size_hint: u32) -> bool {
    elf_type_is(buf, ELF_TYPE_EXEC)
}

/// ELF shared object. Only the `e_type` field is checked; pair with [`elf`].
pub fn elf_lib(buf: &[u8], _size_hint: u32) -> bool {
    elf_type_is(buf, ELF_TYPE_DYN)
}

/// ELF core dump. Only the `e_type` field is checked; pair with [`elf`].
pub fn elf_dump(buf: &[u8], _size_hint: u32) -> bool {
    elf_type_is(buf, ELF_TYPE_CORE)
}

/// DICOM: 128-byte preamble followed by `DICM`.
pub fn dcm(buf: &[u8], _size_hint: u32) -> bool {
    buf.get(DICOM_MAGIC_OFFSET..DICOM_MAGIC_OFFSET + DICOM_MAGIC.len()) == Some(&DICOM_MAGIC[..])
}

/// iNES ROM image.
pub fn nes(buf: &[u8], _size_hint: u32) -> bool {
    buf.starts_with(&NES_MAGIC)
}

/// MARC21 record: a 24-byte leader whose record length is numeric and whose
/// entry map is `4500`, plus at least one field terminator.
pub fn marc(buf: &[u8], _size_hint: u32) -> bool {
    if buf.len() < MARC_LEADER_LEN {
        return false;
    }

    if buf[20..MARC_LEADER_LEN] != MARC_LEADER_TAIL {
        return false;
    }

    if !buf[..5].iter().all(u8::is_ascii_digit) {
        return false;
    }

    buf.contains(&MARC_FIELD_TERMINATOR)
}

/// Time Zone Information Format. A bare `TZif` with nothing after it is not a match.
pub fn tzif(buf: &[u8], _size_hint: u32) -> bool {
    buf.len() > TZIF_MAGIC.len() && buf.starts_with(&TZIF_MAGIC)
}
