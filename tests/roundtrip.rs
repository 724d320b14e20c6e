use lsbsteg::{engine, raster, BinaryFrame, ImageFrame, PixelBuffer, StegError, TextFrame};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::path::PathBuf;

fn noise(rng: &mut StdRng, width: u32, height: u32, channels: u8) -> PixelBuffer {
    let mut data = vec![0u8; width as usize * height as usize * channels as usize];
    rng.fill_bytes(&mut data);
    PixelBuffer::new(width, height, channels, data).unwrap()
}

fn temp_png(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lsbsteg_{}_{}.png", name, std::process::id()))
}

#[test]
fn it_round_trips_random_bytes() -> Result<(), StegError> {
    let mut rng = StdRng::seed_from_u64(7);

    for len in [0usize, 1, 17, 255, 1000] {
        let mut carrier = noise(&mut rng, 40, 30, 3);
        let mut payload = vec![0u8; len];
        rng.fill_bytes(&mut payload);

        engine::hide::<BinaryFrame>(&mut carrier, payload.as_slice())?;

        assert_eq!(engine::reveal::<BinaryFrame>(&carrier)?, payload);
    }

    Ok(())
}

#[test]
fn it_round_trips_printable_text() -> Result<(), StegError> {
    let mut rng = StdRng::seed_from_u64(11);

    for len in [0usize, 1, 64, 500] {
        let mut carrier = noise(&mut rng, 30, 30, 4);
        let text = (0..len)
            .map(|_| rng.gen_range(b' '..=b'~') as char)
            .collect::<String>();

        engine::hide::<TextFrame>(&mut carrier, text.as_str())?;

        assert_eq!(engine::reveal::<TextFrame>(&carrier)?, text);
    }

    Ok(())
}

#[test]
fn it_round_trips_an_image_through_png() -> Result<(), StegError> {
    let mut rng = StdRng::seed_from_u64(13);

    let mut carrier = noise(&mut rng, 32, 32, 3);
    let secret = noise(&mut rng, 8, 6, 3);

    engine::hide::<ImageFrame>(&mut carrier, &secret)?;

    let path = temp_png("image");
    raster::save(&carrier, &path)?;
    let loaded = raster::load(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(loaded, carrier);
    assert_eq!(engine::reveal::<ImageFrame>(&loaded)?, secret);

    Ok(())
}

#[test]
fn it_keeps_rgba_carriers_rgba() -> Result<(), StegError> {
    let mut rng = StdRng::seed_from_u64(17);
    let mut carrier = noise(&mut rng, 16, 16, 4);

    engine::hide::<BinaryFrame>(&mut carrier, &b"alpha channel too"[..])?;

    let path = temp_png("rgba");
    raster::save(&carrier, &path)?;
    let loaded = raster::load(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(loaded.channels(), 4);
    assert_eq!(engine::reveal::<BinaryFrame>(&loaded)?, b"alpha channel too");

    Ok(())
}

#[test]
fn it_fills_every_plane_exactly() -> Result<(), StegError> {
    let mut rng = StdRng::seed_from_u64(19);
    let carrier = noise(&mut rng, 5, 3, 3);

    let room = (engine::capacity_bits(&carrier) - 64) / 8;
    let mut payload = vec![0u8; room as usize];
    rng.fill_bytes(&mut payload);

    let mut full = carrier.clone();
    engine::hide::<BinaryFrame>(&mut full, payload.as_slice())?;
    assert_eq!(engine::reveal::<BinaryFrame>(&full)?, payload);

    payload.push(0);
    let mut over = carrier.clone();
    let err = engine::hide::<BinaryFrame>(&mut over, payload.as_slice()).unwrap_err();
    assert!(matches!(err, StegError::CapacityExceeded { .. }));
    assert_eq!(over, carrier);

    Ok(())
}

#[test]
fn it_is_deterministic() -> Result<(), StegError> {
    let mut rng = StdRng::seed_from_u64(23);
    let carrier = noise(&mut rng, 12, 12, 3);

    let mut a = carrier.clone();
    let mut b = carrier.clone();
    engine::hide::<TextFrame>(&mut a, "same message")?;
    engine::hide::<TextFrame>(&mut b, "same message")?;

    assert_eq!(a, b);
    assert_ne!(a, carrier);

    Ok(())
}
