use super::*;
use arrayvec::ArrayVec;

type ArraySparse<T> = SparseStorage<T, ArrayVec<[SparseStorageSlot<T>; 3]>>;

#[test]
fn holes_are_reused() {
    let mut storage = SparseVec::new();
    let a = storage.add('a');
    let b = storage.add('b');
    let c = storage.add('c');
    assert_eq!((a, b, c), (0, 1, 2));
    assert!(storage.is_dense());

    assert_eq!(storage.remove(a), 'a');
    assert_eq!(storage.remove(c), 'c');
    assert_eq!(storage.num_holes(), 2);
    assert_eq!(storage.len(), 1);
    assert!(!storage.contains_key(a));
    assert_eq!(storage.get(b), Some(&'b'));
    assert_eq!(storage.get(a), None);

    // Last punched, first filled
    assert_eq!(storage.add('d'), c);
    assert_eq!(storage.add('e'), a);
    assert!(storage.is_dense());
    assert_eq!(storage.add('f'), 3);
    assert_eq!(storage.len(), 4);
}

#[test]
#[should_panic]
fn removing_hole_panics() {
    let mut storage = SparseVec::new();
    let index = storage.add(1987_u32);
    storage.remove(index);
    storage.remove(index);
}

#[test]
fn fixed_capacity() {
    let mut storage: ArraySparse<u8> = Storage::new();
    assert_eq!(storage.capacity(), 3);
    for value in 0..3 {
        assert!(storage.try_add(value).is_ok());
    }
    assert_eq!(storage.try_add(3), Err(3));
    storage.remove(1);
    assert_eq!(storage.try_add(3), Ok(1));
    assert_eq!(storage.get(1), Some(&3));

    storage.clear();
    assert!(storage.is_empty());
    assert!(storage.is_dense());
    assert_eq!(storage.try_add(4), Ok(0));
}
