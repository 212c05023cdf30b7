//! Out-of-range and invalid-argument rejection leaves storage untouched

use memory_access::{
    bulk_get, bulk_put, memmove, memmove_within, peek_int_at, peek_short_array, poke_int_array,
    poke_long_array, AddressOf, ByteOrder, MemoryError, Span,
};

#[test]
fn test_poke_array_source_overrun() {
    let values = [1i32, 2, 3];
    let mut array = vec![0xAAu8; 16];
    let ptr = array.address_of_mut();

    for (offset, count) in [(0, 4), (3, 1), (2, 2), (usize::MAX, 2)] {
        let result = unsafe { poke_int_array(ptr, &values, offset, count, false) };
        assert!(
            matches!(result, Err(MemoryError::OutOfRange { .. })),
            "offset {} count {} should be rejected",
            offset,
            count
        );
    }
    assert!(array.iter().all(|&b| b == 0xAA));
}

#[test]
fn test_peek_array_dest_overrun() {
    let array = vec![0x11u8; 8];
    let ptr = array.address_of();
    let mut dest = [0i16; 2];

    let result = unsafe { peek_short_array(ptr, &mut dest, 1, 2, false) };
    assert!(matches!(
        result,
        Err(MemoryError::OutOfRange {
            offset: 1,
            count: 2,
            length: 2
        })
    ));
    assert_eq!(dest, [0, 0]);
}

#[test]
fn test_address_extent_wrap_rejected() {
    let values = [1i64, 2];
    let top = memory_access::Address::new(usize::MAX - 8);
    let result = unsafe { poke_long_array(top, &values, 0, 2, false) };
    assert!(matches!(result, Err(MemoryError::AddressOverflow { .. })));
}

#[test]
fn test_bulk_windows_checked_on_both_sides() {
    let mut bytes = [0u8; 8];
    assert!(bulk_put::<i64>(&mut bytes, 0, &[], 0, 0, false).is_ok());
    assert!(bulk_put(&mut bytes, 1, &[7i64], 0, 1, false).is_err());
    assert_eq!(bytes, [0; 8]);

    let mut values = [0i64; 4];
    assert!(bulk_get(&mut values, 0, &bytes, 0, usize::MAX / 4, false).is_err());
    assert!(bulk_get(&mut values, 3, &bytes, 0, 2, false).is_err());
    assert_eq!(values, [0; 4]);
}

#[test]
fn test_negative_arguments_fail_closed() {
    let err = Span::from_signed(-4, 2).unwrap_err();
    assert!(err.is_range_error());
    assert!(matches!(err, MemoryError::InvalidArgument(_)));

    let err = Span::from_signed(0, -1).unwrap_err();
    assert!(err.to_string().contains("negative count"));
}

#[test]
fn test_signed_span_drives_transfer() {
    let values = [10i32, 20, 30];
    let mut array = vec![0u8; 12];
    let span = Span::from_signed(1, 2).unwrap();
    let ptr = array.address_of_mut();

    unsafe { poke_int_array(ptr, &values, span.offset, span.count, false) }.unwrap();
    assert_eq!(peek_int_at(&array, 0, ByteOrder::LittleEndian).unwrap(), 20);
    assert_eq!(peek_int_at(&array, 4, ByteOrder::LittleEndian).unwrap(), 30);
    assert_eq!(peek_int_at(&array, 8, ByteOrder::LittleEndian).unwrap(), 0);
}

#[test]
fn test_memmove_rejections_leave_buffers_unchanged() {
    let src: Vec<u8> = (0..32).collect();
    let mut dst = vec![0xFFu8; 32];

    assert!(memmove(&mut dst, 30, &src, 0, 3).is_err());
    assert!(memmove(&mut dst, 0, &src, 30, 3).is_err());
    assert!(memmove(&mut dst, usize::MAX, &src, 0, 1).is_err());
    assert!(dst.iter().all(|&b| b == 0xFF));

    let mut buf = src.clone();
    assert!(memmove_within(&mut buf, 0, 16, 17).is_err());
    assert!(memmove_within(&mut buf, 16, 0, 17).is_err());
    assert_eq!(buf, src);
}
