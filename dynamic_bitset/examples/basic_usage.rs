use dynamic_bitset::{BitsetError, DynamicBitset};

fn main() -> Result<(), BitsetError> {
    println!("=== Dynamic Bitset Examples ===\n");

    example_feature_flags()?;
    example_editing()?;
    example_conversion()?;

    Ok(())
}

fn example_feature_flags() -> Result<(), BitsetError> {
    println!("Example 1: A compact feature-flag set");

    const DARK_MODE: usize = 0;
    const BETA_SEARCH: usize = 1;
    const TELEMETRY: usize = 2;

    let mut flags = DynamicBitset::with_len(3, false)?;
    flags.set(DARK_MODE, true)?;
    flags.set(BETA_SEARCH, true)?;

    println!("  dark mode:   {}", flags.test(DARK_MODE)?);
    println!("  beta search: {}", flags.test(BETA_SEARCH)?);
    println!("  telemetry:   {}", flags.test(TELEMETRY)?);
    println!("  any enabled: {}, all enabled: {}", flags.any(), flags.all());
    println!();

    Ok(())
}

fn example_editing() -> Result<(), BitsetError> {
    println!("Example 2: Inserting, removing, slicing");

    let mut bs = DynamicBitset::from_bits(&[true, true, false, false]);
    bs.insert_repeat(2, 3, true)?;
    println!("  after insert: {:?} ({} bits)", collect(&bs), bs.len());

    bs.remove_range(1, 3)?;
    println!("  after remove: {:?} ({} bits)", collect(&bs), bs.len());

    let tail = bs.slice(1, bs.len() - 1)?;
    println!("  tail slice:   {:?} ({} bits)", collect(&tail), tail.len());
    println!();

    Ok(())
}

fn example_conversion() -> Result<(), BitsetError> {
    println!("Example 3: Integer conversion");

    let mut bs = DynamicBitset::with_len(10, false)?;
    bs.set(4, true)?;
    println!("  bit 4 set  -> {}", bs.to_u64()?);

    bs.flip_all();
    println!("  flipped    -> {:#012b}", bs.to_u64()?);

    // 10 logical bits packed into 2 bytes of storage.
    println!("  raw bytes:  {:?}", bs.as_bytes());

    Ok(())
}

fn collect(bs: &DynamicBitset) -> Vec<u8> {
    bs.iter().map(u8::from).collect()
}
