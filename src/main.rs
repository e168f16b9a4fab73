mod narration;

use anyhow::{bail, Context, Result};
use bounded_stack::{BoundedStack, StackError, DEFAULT_CAPACITY};
use log::info;
use narration::Narrator;
use std::{
    env,
    fmt::Display,
    io::{self, Write},
};

/// Largest capacity the overflow scenario will fill.
const MAX_DEMO_CAPACITY: usize = 1_000_000;

fn main() -> Result<()> {
    env_logger::init();

    let capacity = parse_capacity(env::args().nth(1).as_deref())?;
    info!("running demo scenarios, overflow capacity {capacity}");

    let mut n = Narrator::new(io::stdout());
    integer_stack(&mut n)?;
    double_stack_overflow(&mut n, capacity)?;
    string_stack(&mut n)?;
    empty_stack(&mut n)?;
    vector_stack(&mut n)?;
    n.expected("\nAll scenarios completed.")?;

    Ok(())
}

fn parse_capacity(arg: Option<&str>) -> Result<usize> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_CAPACITY);
    };
    let capacity: usize = arg
        .parse()
        .with_context(|| format!("invalid capacity argument: {arg:?}"))?;
    if capacity > MAX_DEMO_CAPACITY {
        bail!("capacity {capacity} is too large for the demo (max {MAX_DEMO_CAPACITY})");
    }
    Ok(capacity)
}

fn integer_stack<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Integer stack")?;
    let mut stack = BoundedStack::new();

    for value in [10, 20, 30] {
        stack.push(value)?;
        n.line(format!("Size after pushing {value}: {}", stack.size()))?;
    }
    n.line(format!("Top element: {}", stack.peek()?))?;

    n.line(format!("Popping: {}", drain(&mut stack)?))?;
    n.line(format!("Final size: {}", stack.size()))?;

    expect_underflow(n, stack.pop())
}

fn double_stack_overflow<W: Write>(n: &mut Narrator<W>, capacity: usize) -> Result<()> {
    n.heading("Double stack overflow")?;
    let mut stack = BoundedStack::with_capacity(capacity);

    for i in 0..capacity {
        stack.push(i as f64 * 1.1)?;
    }
    n.line(format!("Stack filled to capacity: {}", stack.size()))?;

    match stack.push(capacity as f64 + 0.1) {
        Err(e @ StackError::CapacityExceeded { .. }) => {
            n.expected(format!("Overflow correctly caught: {e}"))
        }
        Err(e) => Err(e.into()),
        Ok(()) => {
            n.unexpected("Overflow not caught!")?;
            bail!("push beyond capacity {capacity} succeeded");
        }
    }
}

fn string_stack<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("String stack")?;
    let mut stack = BoundedStack::new();

    for word in ["Hello", "World", "!"] {
        stack.push(word.to_string())?;
    }
    n.line(format!("Popping: {}", drain(&mut stack)?))
}

fn empty_stack<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Empty stack")?;
    let mut stack: BoundedStack<i32> = BoundedStack::new();

    n.line(format!("Is empty: {}", stack.is_empty()))?;
    n.line(format!("Size: {}", stack.size()))?;

    expect_underflow(n, stack.peek())?;
    expect_underflow(n, stack.pop())
}

fn vector_stack<W: Write>(n: &mut Narrator<W>) -> Result<()> {
    n.heading("Vector stack")?;
    let mut stack = BoundedStack::new();

    stack.push(vec![1, 2, 3])?;
    stack.push(vec![4, 5, 6])?;

    let popped = stack.pop()?;
    n.line(format!("Popped vector: {popped:?}"))?;
    n.line(format!("Remaining: {stack:?}"))
}

/// Pop everything, joining the values with spaces in pop order.
fn drain<T: Display>(stack: &mut BoundedStack<T>) -> Result<String> {
    let mut popped = vec![];
    while !stack.is_empty() {
        popped.push(stack.pop()?.to_string());
    }
    Ok(popped.join(" "))
}

fn expect_underflow<W: Write, T>(
    n: &mut Narrator<W>,
    outcome: Result<T, StackError>,
) -> Result<()> {
    match outcome {
        Err(e @ StackError::EmptyContainer) => {
            n.expected(format!("Underflow correctly caught: {e}"))
        }
        Err(e) => Err(e.into()),
        Ok(_) => {
            n.unexpected("Underflow not caught!")?;
            bail!("empty stack returned a value");
        }
    }
}
