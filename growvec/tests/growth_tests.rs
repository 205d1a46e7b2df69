use growvec::GrowVec;

#[test]
fn test_capacity_progression_from_default() {
    let mut v: GrowVec<usize> = GrowVec::new().unwrap();
    assert_eq!(v.capacity(), 10);

    for i in 0..11 {
        v.push(i).unwrap();
    }
    assert_eq!(v.capacity(), 15); // floor(10 * 1.5)

    for i in 11..16 {
        v.push(i).unwrap();
    }
    assert_eq!(v.capacity(), 22); // floor(15 * 1.5)

    for i in 16..23 {
        v.push(i).unwrap();
    }
    assert_eq!(v.capacity(), 33); // floor(22 * 1.5)
}

#[test]
fn test_growth_preserves_contents_in_order() {
    let mut v = GrowVec::new().unwrap();
    for i in 0..100_usize {
        v.push(i).unwrap();
    }
    assert_eq!(v.len(), 100);
    for i in 0..100 {
        assert_eq!(v.get(i), Some(&i));
    }
}

#[test]
fn test_capacity_never_shrinks() {
    let mut v = GrowVec::new().unwrap();
    for i in 0..50_usize {
        v.push(i).unwrap();
    }
    let cap = v.capacity();

    while v.pop().is_some() {}
    assert_eq!(v.capacity(), cap);

    v.push(1).unwrap();
    v.clear();
    assert_eq!(v.capacity(), cap);
}

#[test]
fn test_capacity_one_still_grows() {
    let mut v = GrowVec::with_capacity(1).unwrap();
    v.push(1).unwrap();
    v.push(2).unwrap();
    v.push(3).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_triggers_growth_when_full() {
    let mut v: GrowVec<u32> = GrowVec::with_capacity(2).unwrap();
    v.push(1).unwrap();
    v.push(3).unwrap();
    assert_eq!(v.len(), v.capacity());

    v.insert(1, 2).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3]);
    assert!(v.capacity() > 2);
}

#[test]
fn test_len_never_exceeds_capacity() {
    let mut v = GrowVec::new().unwrap();
    for i in 0..200_usize {
        v.push(i).unwrap();
        assert!(v.len() <= v.capacity());
    }
}

#[test]
fn test_no_growth_below_capacity() {
    let mut v: GrowVec<u8> = GrowVec::with_capacity(100).unwrap();
    for b in 0..100 {
        v.push(b).unwrap();
    }
    assert_eq!(v.capacity(), 100);
}
