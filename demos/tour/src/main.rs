// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Walks through arrays, growable sequences and text buffers, printing
//! `name - [values] - len: n - cap: c` after every step.
//!
//! ```bash
//! RUST_LOG=sliceworks_seq=trace cargo run -p sliceworks-tour
//! ```

mod logging;
mod print;

use std::rc::Rc;

use regex::bytes::Regex;
use sliceworks::array::{ArrayError, FixedArray};
use sliceworks::seq::{GrowableSeq, SeqError};
use sliceworks::text::{TextBuf, TextError};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
enum TourError {
    #[error("sequence: {0}")]
    Seq(#[from] SeqError),

    #[error("array: {0}")]
    Array(#[from] ArrayError),

    #[error("text: {0}")]
    Text(#[from] TextError),

    #[error("pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn main() {
    logging::init();

    let sections: [(&str, fn() -> Result<(), TourError>); 6] = [
        ("defineMultipleWays", define_multiple_ways),
        ("addElements", add_elements),
        ("removeElements", remove_elements),
        ("manageMemory", manage_memory),
        ("arrays", arrays),
        ("strings", strings),
    ];

    for (name, section) in sections {
        print::title(name);
        if let Err(e) = section() {
            error!(section = name, error = %e, "section failed");
            std::process::exit(1);
        }
    }

    info!("tour finished");
}

fn define_multiple_ways() -> Result<(), TourError> {
    let a: GrowableSeq<i32> = GrowableSeq::new();
    print::seq("a", &a);
    if a.is_nil() {
        println!("a - nil!");
    }

    let b = GrowableSeq::<i32>::create(0, 0)?;
    print::seq("b", &b);

    let c = GrowableSeq::from(vec![2, 3, 5, 7, 11]);
    print::seq("c", &c);

    // A view, not a copy: d shares c's store.
    let d = c.view(1, 3)?;
    print::seq("d", &d);

    let e = GrowableSeq::from(vec![1, 2, 3]);
    print::seq("e", &e);
    print::seq("f", &e.view(0, 2)?);
    print::seq("g", &e.view_with_capacity(0, 2, e.capacity())?);
    print::seq("h", &e.view(0, 0)?);

    print::seq("i", &GrowableSeq::<i32>::create(0, 0)?);
    print::seq("j", &GrowableSeq::<i32>::create(3, 3)?);

    let k = GrowableSeq::<i32>::create(2, 3)?.append(&[4, 5, 6, 7, 8]);
    print::seq("k", &k);

    print::seq("l", &GrowableSeq::<i32>::create(0, 3)?);
    Ok(())
}

fn add_elements() -> Result<(), TourError> {
    print::subtitle("Add element to the end of the sequence");
    let mut a = GrowableSeq::new();
    a.push(1);
    a.extend_from_slice(&[2, 3, 4]);
    a.extend_from_slice(&[5, 6, 7, 8]);
    print::seq("a", &a);

    print::subtitle("Scale the capacity of the sequence");
    let mut sl = GrowableSeq::<i32>::create(1, 1)?;
    print::seq("sl", &sl);
    for value in 0..5 {
        sl = sl.append(&[value]);
        print::seq("sl", &sl);
    }

    print::subtitle("Add elements to the beginning of the sequence");
    let mut b = GrowableSeq::from(vec![1, 2, 3, 4]);
    b.prepend(&[-2, -1]);
    print::seq("b", &b);

    print::subtitle("Add an element at position i");
    let i = 3;
    b.insert_at(i, &[0])?;
    print::seq("b", &b);

    print::subtitle("Add elements at position i within capacity");
    let mut e = GrowableSeq::<i32>::with_capacity(8);
    e.extend_from_slice(&[55, 66, 77, 88, 99]);
    print::seq("e", &e);
    e.insert_at(i, &[11, 22])?;
    print::seq("e", &e);
    Ok(())
}

fn remove_elements() -> Result<(), TourError> {
    print::subtitle("Remove elements at the end of the sequence");
    let mut a = GrowableSeq::from(vec![1, 2, 3, 4]);
    print::seq("a", &a);
    a.remove_suffix(1)?;
    print::seq("a", &a);
    a.remove_suffix(2)?;
    print::seq("a", &a);

    print::subtitle("Remove elements at the beginning of the sequence");
    let mut b = GrowableSeq::from(vec![1, 2, 3, 4]);
    print::seq("b", &b);
    b.remove_prefix(1)?;
    print::seq("b", &b);
    b.remove_prefix(2)?;
    print::seq("b", &b);

    print::subtitle("Remove elements at position i");
    let mut c: GrowableSeq<i32> = (1..=10).collect();
    print::seq("c", &c);
    c.remove_at(2, 1)?;
    print::seq("c", &c);
    c.remove_at(2, 2)?;
    print::seq("c", &c);
    Ok(())
}

fn manage_memory() -> Result<(), TourError> {
    print::subtitle("Limit the need to reallocate memory");
    let mut trimmed = GrowableSeq::from(b"hello world".as_slice());
    trimmed.filter_in_place(|byte| *byte == b' ');
    print::seq("trimmedSpaceSequence", &trimmed);

    print::subtitle("Release values before dropping them");
    let mut pointers = GrowableSeq::from(vec![Some(Rc::new(78)), Some(Rc::new(88))]);
    pointers.release_suffix(1)?;
    print::seq("pointers", &pointers);

    print::subtitle("Copy a small result out of a large store");
    let document = TextBuf::from("name: Jane Doe\nphone: 0912345678\nnote: call after 6pm");
    let store = document.to_seq();
    let digits = first_digit_run(&store)?;
    println!(
        "digits - {} - pinned store refs: {}",
        TextBuf::from_seq(&digits)?,
        digits.backing_refs()
    );
    Ok(())
}

/// Returns the first run of ASCII digits in `bytes` as its own compact sequence.
fn first_digit_run(bytes: &GrowableSeq<u8>) -> Result<GrowableSeq<u8>, TourError> {
    let digits = Regex::new("[0-9]+")?;
    let (start, end) = bytes.open(|live| {
        digits
            .find(live)
            .map_or((0, 0), |found| (found.start(), found.end()))
    });

    let mut run = bytes.view(start, end)?;
    // Without this the ten digits would keep the whole document alive.
    run.compact();

    Ok(run)
}

fn arrays() -> Result<(), TourError> {
    let a = FixedArray::<i32, 3>::new();
    println!("a: {:?} - size: {}", a.as_slice(), a.len());

    let c = FixedArray::<i32, 5>::from_sparse(&[(2, 4), (4, 3)])?;
    println!("c: {:?} - size: {}", c.as_slice(), c.len());

    let original = FixedArray::from([1, 2, 3]);
    let mut copy = original;
    copy.set(0, 100)?;
    println!("original: {:?} - copy: {:?}", original.as_slice(), copy.as_slice());

    let mut pointed = original;
    let b = &mut pointed;
    for value in b.iter_mut() {
        *value += 1;
    }
    println!("through pointer: {:?}", pointed.as_slice());
    println!("size: {} - cap: {}", original.len(), original.capacity());
    Ok(())
}

fn strings() -> Result<(), TourError> {
    let s1 = TextBuf::from("hello world");
    println!("s1: {s1} - len: {}", s1.len());

    let hello = s1.prefix(5)?;
    let world = s1.suffix(6)?;
    println!("{hello} {world}");
    println!("shares text: {}", hello.shares_text(&s1));
    Ok(())
}
