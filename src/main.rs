use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use memory_access::config::{validate_config, ConfigLoader, DEFAULT_CONFIG_FILE};
use memory_access::{
    memmove_within, peek_int, peek_long, peek_short, poke_int, poke_long, poke_short, AddressOf,
    SafeMemoryAccess,
};

const SCRATCH_LEN: usize = 32;

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let config = ConfigLoader::new(&config_path)
        .load_or_default()
        .with_context(|| format!("loading {}", config_path))?;
    validate_config(&config)?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("memory-access self-check v{}", env!("CARGO_PKG_VERSION"));
    info!("Architecture: {}", std::env::consts::ARCH);

    let access = SafeMemoryAccess::from_config(&config);
    let mut scratch = vec![0u8; SCRATCH_LEN];

    check_round_trips(&mut scratch)?;
    check_swap_duality(&mut scratch, &access)?;
    check_overlapping_moves(&mut scratch)?;

    info!("all checks passed");
    Ok(())
}

fn dump(step: &str, buf: &[u8]) {
    println!("{:<24} {}", step, hex::encode(buf));
}

fn check_round_trips(buf: &mut [u8]) -> Result<()> {
    for offset in 0..2 {
        for swap in [false, true] {
            buf.fill(0);
            let addr = buf.address_of_mut().add(offset);
            // SAFETY: offset + 8 + 4 + 2 bytes fit inside the scratch buffer.
            let (short, int, long) = unsafe {
                poke_long(addr, 0x1020_3040_5060_7080, swap);
                poke_int(addr.add(8), 0x7FFF_FFFF, swap);
                poke_short(addr.add(12), 0x4000, swap);
                (
                    peek_short(addr.add(12), swap),
                    peek_int(addr.add(8), swap),
                    peek_long(addr, swap),
                )
            };
            debug!(offset, swap, short, int, long, "round trip");
            if long != 0x1020_3040_5060_7080 || int != 0x7FFF_FFFF || short != 0x4000 {
                bail!("round trip mismatch at offset {} (swap = {})", offset, swap);
            }
            dump(&format!("round trip +{} swap={}", offset, swap), buf);
        }
    }
    Ok(())
}

fn check_swap_duality(buf: &mut [u8], access: &SafeMemoryAccess) -> Result<()> {
    buf.fill(0);
    let addr = buf.address_of_mut().add(1);
    // SAFETY: four bytes at offset 1 lie inside the scratch buffer.
    let swapped: i32 = unsafe {
        access.poke(addr, 2_147_483_647i32, false)?;
        access.peek(addr, true)?
    };
    if swapped != -129 {
        bail!("swapped read returned {}, expected -129", swapped);
    }
    dump("swap duality", buf);
    Ok(())
}

fn check_overlapping_moves(buf: &mut [u8]) -> Result<()> {
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte = i as u8;
    }
    let before = buf.to_vec();

    memmove_within(buf, 4, 0, 16)?;
    if buf[4..20] != before[0..16] {
        bail!("backward-overlap move corrupted the source bytes");
    }
    dump("move +4 (descending)", buf);

    let before = buf.to_vec();
    memmove_within(buf, 0, 6, 16)?;
    if buf[0..16] != before[6..22] {
        bail!("forward-overlap move corrupted the source bytes");
    }
    dump("move -6 (ascending)", buf);
    Ok(())
}
