use strata_collection::BucketedArray;
use strata_core::Storage;
use strata_sort::{is_sorted, sort, SortAdapter};
use strata_stack::{ChunkedStack, StackConfig};

#[derive(Clone, Debug, PartialEq)]
struct Item {
    rank: u32,
    label: String,
}

fn items(ranks: &[u32]) -> Vec<Item> {
    ranks
        .iter()
        .map(|&rank| Item {
            rank,
            label: format!("item-{rank}"),
        })
        .collect()
}

fn by_rank(a: &Item, b: &Item) -> bool {
    a.rank < b.rank
}

fn ranks<S: Storage<Item>>(storage: &S) -> Vec<u32> {
    (0..storage.len())
        .filter_map(|i| storage.get(i).map(|item| item.rank))
        .collect()
}

const TEN: [u32; 10] = [42, 7, 19, 3, 88, 1, 56, 23, 9, 64];

#[test]
fn sorts_bucketed_array() {
    let mut array = BucketedArray::new(3);
    array.extend(items(&TEN));
    sort(&mut SortAdapter::new(&mut array, by_rank));
    assert_eq!(ranks(&array), vec![1, 3, 7, 9, 19, 23, 42, 56, 64, 88]);
    for item in array.iter() {
        assert_eq!(item.label, format!("item-{}", item.rank));
    }
}

#[test]
fn sorts_chunked_stack() {
    let mut stack = ChunkedStack::with_config(StackConfig {
        first_bucket_size: 2,
        ..StackConfig::new()
    });
    stack.extend(items(&TEN));
    sort(&mut SortAdapter::new(&mut stack, by_rank));
    assert_eq!(ranks(&stack), vec![1, 3, 7, 9, 19, 23, 42, 56, 64, 88]);
    assert_eq!(stack.peek().map(|item| item.rank), Ok(88));
}

#[test]
fn sorts_large_reversed_input_on_both_storages() {
    const COUNT: u32 = 100_000;
    let mut array: BucketedArray<u32> = (0..COUNT).rev().collect();
    let mut stack: ChunkedStack<u32> = (0..COUNT).rev().collect();

    let mut a = SortAdapter::new(&mut array, |x: &u32, y: &u32| x < y);
    sort(&mut a);
    assert!(is_sorted(&a));
    let mut s = SortAdapter::new(&mut stack, |x: &u32, y: &u32| x < y);
    sort(&mut s);
    assert!(is_sorted(&s));

    assert!(array.iter().copied().eq(0..COUNT));
    assert!(stack.iter().copied().eq(0..COUNT));
}
