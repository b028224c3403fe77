use bit_extract::{BitExtractError, bit, extract_u8, extract_u16, extract_u32};

// A made-up packed header layout, LSB-first:
//   bits  0..=2   version   (3 bits)
//   bit   3       compressed flag
//   bits  4..=15  stream id (12 bits)
//   bits 16..=35  payload length (20 bits)
fn main() -> Result<(), BitExtractError> {
    let header = [0b1100_1010u8, 0xBC, 0x34, 0x12, 0x00];

    println!("=== Packed Header Decode ===\n");

    let version = extract_u8(0, 3, &header)?;
    let compressed = bit(3, &header)? == 1;
    let stream_id = extract_u16(4, 12, &header)?;
    let payload_len = extract_u32(16, 20, &header)?;

    println!("  version:     {version}");
    println!("  compressed:  {compressed}");
    println!("  stream id:   0x{stream_id:03X}");
    println!("  payload len: {payload_len} bytes");

    // Contract violations are reported, not read past the buffer.
    match extract_u32(16, 25, &header) {
        Ok(_) => unreachable!(),
        Err(e) => println!("\n  25-bit read at bit 16: {e}"),
    }

    Ok(())
}
