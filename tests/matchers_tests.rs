//! Matcher tests: one realistic header per format, plus the near misses around each rule.

use binsig::matchers::{
    dbf, dcm, elf, elf_dump, elf_exe, elf_lib, elf_obj, exe, lnk, marc, nes, swf, tzif, wasm,
};

/// First bytes of a little-endian x86_64 ELF header with the given `e_type`.
fn elf_header(e_type: [u8; 2]) -> Vec<u8> {
    let mut buf = vec![0x7F, b'E', b'L', b'F', 2, 1, 1, 0];
    buf.resize(16, 0);
    buf.extend_from_slice(&e_type);
    buf.extend_from_slice(&[0x3E, 0x00]);
    buf
}

/// Minimal MARC21 leader: record length "00123", entry map "4500" at offset 20.
fn marc_leader() -> Vec<u8> {
    let mut buf = b"00123nam a2200061 a ".to_vec();
    buf.extend_from_slice(b"4500");
    assert_eq!(buf.len(), 24);
    buf
}

/// Windows shell link header.
#[test]
fn lnk_header() {
    let buf = [0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert!(lnk(&buf, 0));
    assert!(!lnk(&buf[..7], 0));
    assert!(!lnk(&[0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x01], 0));
}

/// All three SWF compression variants match; other letters do not.
#[test]
fn swf_variants() {
    assert!(swf(b"FWS\x0a", 0));
    assert!(swf(b"CWS\x0a", 0));
    assert!(swf(b"ZWS\x0d", 0));
    assert!(swf(b"CWS", 0));
    assert!(!swf(b"XWS\x0a", 0));
    assert!(!swf(b"FW", 0));
}

/// WebAssembly module header.
#[test]
fn wasm_header() {
    assert!(wasm(&[0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00], 0));
    assert!(!wasm(&[0x00, 0x61, 0x73], 0));
    assert!(!wasm(b"asm\0", 0));
}

/// dBase: known type code plus a valid month and day.
#[test]
fn dbf_header() {
    assert!(dbf(&[0x03, 0x00, 0x06, 0x0F], 0));
    assert!(dbf(&[0x8B, 0x7C, 0x0C, 0x1F, 0x10, 0x00], 0));
    // Month 0 and month 13.
    assert!(!dbf(&[0x03, 0x00, 0x00, 0x0F], 0));
    assert!(!dbf(&[0x03, 0x00, 0x0D, 0x0F], 0));
    // Day 0 and day 32.
    assert!(!dbf(&[0x03, 0x00, 0x06, 0x00], 0));
    assert!(!dbf(&[0x03, 0x00, 0x06, 0x20], 0));
    // 0x06 is not a dBase type code.
    assert!(!dbf(&[0x06, 0x00, 0x06, 0x0F], 0));
    assert!(!dbf(&[0x03, 0x00, 0x06], 0));
}

/// Every listed dBase type code is accepted with a valid date.
#[test]
fn dbf_all_type_codes() {
    for code in binsig::format::DBF_TYPE_CODES {
        assert!(dbf(&[code, 0x00, 0x01, 0x01], 0), "type code {code:#04x}");
    }
}

/// DOS `MZ` stub.
#[test]
fn exe_header() {
    assert!(exe(b"MZ\x90\x00", 0));
    assert!(exe(b"MZ", 0));
    assert!(!exe(b"M", 0));
    assert!(!exe(b"ZM", 0));
}

/// ELF magic alone is enough for the generic predicate.
#[test]
fn elf_magic() {
    assert!(elf(&elf_header([2, 0]), 0));
    assert!(elf(b"\x7FELF", 0));
    assert!(!elf(b"\x7FEL", 0));
    assert!(!elf(b"\x7Felf", 0));
}

/// `e_type` = 2 in little-endian and big-endian order selects only the executable predicate.
#[test]
fn elf_executable_either_endianness() {
    for e_type in [[0x02, 0x00], [0x00, 0x02]] {
        let mut buf = elf_header(e_type);
        buf.resize(20, 0);
        assert!(elf_exe(&buf, 0));
        assert!(!elf_obj(&buf, 0));
        assert!(!elf_lib(&buf, 0));
        assert!(!elf_dump(&buf, 0));
    }
}

/// Each `e_type` value maps to exactly one subtype predicate.
#[test]
fn elf_subtypes() {
    let subtypes: [(u8, fn(&[u8], u32) -> bool); 4] =
        [(1, elf_obj), (2, elf_exe), (3, elf_lib), (4, elf_dump)];
    for (value, expected) in subtypes {
        let buf = elf_header([value, 0]);
        for (other, matcher) in subtypes {
            assert_eq!(matcher(&buf, 0), other == value, "e_type {value} vs {other}");
        }
        assert!(expected(&elf_header([0, value]), 0));
    }
}

/// Subtype predicates need bytes 16 and 17.
#[test]
fn elf_subtype_truncated() {
    let buf = elf_header([1, 0]);
    assert!(elf_obj(&buf[..18], 0));
    assert!(!elf_obj(&buf[..17], 0));
    // A bare ET_NONE or a two-byte 0x0101 is not a subtype.
    assert!(!elf_obj(&elf_header([0, 0]), 0));
    assert!(!elf_obj(&elf_header([1, 1]), 0));
}

/// DICOM: `DICM` right after the 128-byte preamble.
#[test]
fn dcm_preamble() {
    let mut buf = vec![0u8; 128];
    buf.extend_from_slice(b"DICM");
    assert!(dcm(&buf, 0));
    buf.extend_from_slice(&[0x02, 0x00, 0x00, 0x00]);
    assert!(dcm(&buf, 0));
    assert!(!dcm(&buf[..131], 0));

    let mut shifted = vec![0u8; 127];
    shifted.extend_from_slice(b"DICM\0");
    assert!(!dcm(&shifted, 0));
}

/// iNES header.
#[test]
fn nes_header() {
    assert!(nes(&[0x4E, 0x45, 0x53, 0x1A, 0x02, 0x01], 0));
    assert!(!nes(b"NES\0", 0));
    assert!(!nes(b"NES", 0));
}

/// MARC21: digits, `4500` and a field terminator.
#[test]
fn marc_record() {
    let mut buf = marc_leader();
    buf.extend_from_slice(b"001001300000");
    buf.push(0x1E);
    assert!(marc(&buf, 0));
}

/// Without a field terminator the leader alone is not enough.
#[test]
fn marc_requires_field_terminator() {
    let mut buf = marc_leader();
    buf.extend_from_slice(b"001001300000");
    assert!(!marc(&buf, 0));
}

/// The terminator may sit inside the leader itself.
#[test]
fn marc_terminator_anywhere() {
    let mut buf = marc_leader();
    buf[10] = 0x1E;
    assert!(marc(&buf, 0));
}

/// Non-digit record length or wrong entry map rejects the record.
#[test]
fn marc_leader_checks() {
    let mut buf = marc_leader();
    buf.push(0x1E);

    let mut bad_length = buf.clone();
    bad_length[4] = b'x';
    assert!(!marc(&bad_length, 0));

    let mut bad_map = buf.clone();
    bad_map[23] = b'1';
    assert!(!marc(&bad_map, 0));

    assert!(!marc(&buf[..23], 0));
}

/// TZif needs at least one byte after the magic.
#[test]
fn tzif_header() {
    assert!(tzif(b"TZif2", 0));
    assert!(tzif(b"TZif\0\0\0\0", 0));
    assert!(!tzif(b"TZif", 0));
    assert!(!tzif(b"tzif2", 0));
}

/// The size hint never changes a verdict.
#[test]
fn size_hint_is_ignored() {
    let buf = elf_header([3, 0]);
    for hint in [0, 1, 18, 4096, u32::MAX] {
        assert!(elf(&buf, hint));
        assert!(elf_lib(&buf, hint));
        assert!(!exe(&buf, hint));
    }
}
