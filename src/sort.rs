use clap::ValueEnum;

/// The four comparison sorts covered by the benchmark matrix.
///
/// The variant order is the order the benchmark report groups by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Merge,
    Quick,
    Bubble,
    Insertion,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Bubble,
        Algorithm::Insertion,
    ];

    /// Lowercase name used as the report key and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
        }
    }

    pub fn sort(&self, data: &mut [i32]) {
        match self {
            Algorithm::Merge => merge_sort(data),
            Algorithm::Quick => quick_sort(data),
            Algorithm::Bubble => bubble_sort(data),
            Algorithm::Insertion => insertion_sort(data),
        }
    }
}

/// Repeated adjacent-pair passes. O(n^2), stable.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Shift larger predecessors right and drop the current element into the
/// gap. O(n^2) worst case, stable, fast on nearly-sorted input.
pub fn insertion_sort<T: Ord + Clone>(data: &mut [T]) {
    for i in 1..data.len() {
        let key = data[i].clone();
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1].clone();
            j -= 1;
        }
        data[j] = key;
    }
}

/// Recursive merge sort with per-merge temporary buffers. O(n log n),
/// stable, O(n) auxiliary space during each merge.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() > 1 {
        merge_sort_range(data, 0, data.len() - 1);
    }
}

fn merge_sort_range<T: Ord + Clone>(data: &mut [T], l: usize, r: usize) {
    if l < r {
        let m = l + (r - l) / 2;
        merge_sort_range(data, l, m);
        merge_sort_range(data, m + 1, r);
        merge(data, l, m, r);
    }
}

fn merge<T: Ord + Clone>(data: &mut [T], l: usize, m: usize, r: usize) {
    // Both halves are copied out so the merged order can be written back
    // in place. The buffers are dropped when the merge returns.
    let left = data[l..=m].to_vec();
    let right = data[m + 1..=r].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = l;
    while i < left.len() && j < right.len() {
        // Ties take from the left run, which is what keeps this stable.
        if left[i] <= right[j] {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        data[k] = left[i].clone();
        i += 1;
        k += 1;
    }
    while j < right.len() {
        data[k] = right[j].clone();
        j += 1;
        k += 1;
    }
}

/// Quicksort with a Lomuto partition around the last element of the range.
/// Not stable; O(n log n) average, O(n^2) on sorted-descending input.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    if data.len() > 1 {
        quick_sort_range(data, 0, data.len() - 1);
    }
}

fn quick_sort_range<T: Ord>(data: &mut [T], low: usize, high: usize) {
    if low < high {
        let p = partition(data, low, high);
        if p > 0 {
            quick_sort_range(data, low, p - 1);
        }
        quick_sort_range(data, p + 1, high);
    }
}

fn partition<T: Ord>(data: &mut [T], low: usize, high: usize) -> usize {
    // `i` is the boundary below which everything is <= the pivot.
    let mut i = low;
    for j in low..high {
        if data[j] <= data[high] {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, high);
    i
}
