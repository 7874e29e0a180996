use packed_array::{PackedArray, PackedArrayError, PackingMode};

fn main() {
    println!("=== Packed Array Examples ===\n");

    // Example 1: the classic 4-bit write/read trace
    let _ = example_nibble_trace();

    // Example 2: spanning mode round-trips across byte boundaries
    let _ = example_spanning();

    // Example 3: memory comparison
    let _ = example_memory_savings();
}

fn example_nibble_trace() -> Result<(), PackedArrayError> {
    println!("Example 1: 4-bit elements, single-byte packing");

    let mut arr = PackedArray::with_mode(4, 5, PackingMode::SingleByte)?;

    // Payloads are MSB-aligned in this mode
    arr.set(0, 0)?; //   00000000
    arr.set(1, 174)?; // 10101110
    arr.set(2, 233)?; // 11101001
    arr.set(3, 232)?; // 11101000
    arr.set(2, 174)?; // 10101110

    for i in 0..4 {
        println!("  arr[{}] = {}", i, arr.get(i)?);
    }
    println!("  buffer: {:?}\n", arr.as_bytes());

    Ok(())
}

fn example_spanning() -> Result<(), PackedArrayError> {
    println!("Example 2: 3-bit elements spanning byte boundaries");

    let mut arr = PackedArray::new(3, 8)?;
    for i in 0..8 {
        arr.set(i, i as u8)?;
    }

    let values: Vec<u8> = arr.iter().collect();
    println!("  stored 0..8 in {} bytes: {:?}", arr.as_bytes().len(), values);
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), PackedArrayError> {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    // Standard Vec<u8>: one byte per element
    let standard_bytes = count;

    // PackedArray with 3-bit elements (values 0-7)
    let mut packed = PackedArray::new(3, count)?;
    for i in 0..count {
        packed.set(i, (i % 8) as u8)?;
    }
    let packed_bytes = packed.as_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} 3-bit values:", count);
    println!("  Vec<u8>:  {} bytes", standard_bytes);
    println!("  Packed:   {} bytes", packed_bytes);
    println!("  Savings:  {:.1}%", savings);

    Ok(())
}
