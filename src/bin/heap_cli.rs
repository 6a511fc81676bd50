//! Interactive menu driving an [`arenaheap::Heap`]. Not part of the core
//! allocator — a thin REPL for poking at one from a terminal, reading
//! input with plain `println!`/`stdin` rather than reaching for a
//! CLI-parsing crate.

use std::io::{self, Write};

use arenaheap::{BlockType, Heap};

fn main() {
  env_logger::init();
  let mut heap = Heap::new();

  loop {
    println!(
      "\n1. Size of heap to initialize\n\
      2. Call one of the allocator functions\n\
      3. Write a typed value\n\
      4. Print the current heap\n\
      5. Benchmark\n\
      6. Compact\n\
      7. Exit"
    );
    let Some(choice) = read_usize("> ") else {
      println!("try again...");
      continue;
    };

    let result = match choice {
      1 => cmd_init(&mut heap),
      2 => cmd_call_function(&mut heap),
      3 => cmd_write_value(&mut heap),
      4 => cmd_print(&mut heap),
      5 => cmd_benchmark(),
      6 => cmd_compact(&mut heap),
      7 => break,
      _ => {
        println!("try again...");
        continue;
      }
    };

    if let Err(e) = result {
      println!("Error: {e}");
    }
  }
}

fn cmd_init(heap: &mut Heap) -> Result<(), arenaheap::HeapError> {
  println!("Enter size:");
  let Some(size) = read_usize("") else {
    println!("try again...");
    return Ok(());
  };
  heap.init(size)?;
  println!("Inited");
  Ok(())
}

fn cmd_call_function(heap: &mut Heap) -> Result<(), arenaheap::HeapError> {
  println!("Choose the function to call\n1. allocate\n2. zero_allocate\n3. reallocate\n4. release");
  let Some(choice) = read_usize("> ") else {
    println!("try again...");
    return Ok(());
  };
  match choice {
    1 => {
      println!("Enter size");
      let Some(size) = read_usize("") else { return Ok(()) };
      let ptr = heap.allocate(size)?;
      print_ptr(ptr.map(|p| p.as_ptr()));
    }
    2 => {
      println!("Enter size");
      let Some(size) = read_usize("") else { return Ok(()) };
      println!("Enter num");
      let Some(num) = read_usize("") else { return Ok(()) };
      let ptr = heap.zero_allocate(num, size)?;
      print_ptr(ptr.map(|p| p.as_ptr()));
    }
    3 => {
      println!("Enter size");
      let Some(size) = read_usize("") else { return Ok(()) };
      println!("Enter address (hex)");
      let ptr = read_hex_ptr("");
      let result = heap.reallocate(ptr, size)?;
      print_ptr(result.map(|p| p.as_ptr()));
    }
    4 => {
      println!("Enter address (hex)");
      let ptr = read_hex_ptr("");
      heap.release(ptr)?;
    }
    _ => println!("try again..."),
  }
  Ok(())
}

fn cmd_write_value(heap: &mut Heap) -> Result<(), arenaheap::HeapError> {
  println!("Enter address (hex)");
  let ptr = read_hex_ptr("");
  println!("Enter type\n1. char\n2. int\n3. double");
  let block_type = match read_usize("> ") {
    Some(1) => BlockType::Char,
    Some(2) => BlockType::Int,
    Some(3) => BlockType::Double,
    _ => {
      println!("try again...");
      return Ok(());
    }
  };
  println!("Enter number of elements");
  let Some(count) = read_usize("") else { return Ok(()) };
  let mut values = Vec::with_capacity(count);
  for i in 0..count {
    println!("Enter element {}", i + 1);
    let Some(v) = read_f64("") else { return Ok(()) };
    values.push(v);
  }
  heap.write_typed(ptr, block_type, &values)
}

fn cmd_print(heap: &mut Heap) -> Result<(), arenaheap::HeapError> {
  print!("{}", heap.debug_dump()?);
  Ok(())
}

fn cmd_benchmark() -> Result<(), arenaheap::HeapError> {
  println!("Enter percent of free blocks (1-100)");
  let Some(percent) = read_usize("") else {
    println!("try again...");
    return Ok(());
  };
  let (scan_all, free_list) = Heap::benchmark(percent as u8)?;
  println!("Time with scan-all search:\t{scan_all:?}");
  println!("Time with free-registry search:\t{free_list:?}");
  Ok(())
}

fn cmd_compact(heap: &mut Heap) -> Result<(), arenaheap::HeapError> {
  heap.compact()?;
  println!("Defragmented");
  Ok(())
}

fn print_ptr(ptr: Option<*mut u8>) {
  match ptr {
    Some(p) => println!("{p:p}"),
    None => println!("null (no memory)"),
  }
}

fn read_usize(prompt: &str) -> Option<usize> {
  if !prompt.is_empty() {
    print!("{prompt}");
    let _ = io::stdout().flush();
  }
  let mut line = String::new();
  io::stdin().read_line(&mut line).ok()?;
  line.trim().parse().ok()
}

fn read_f64(prompt: &str) -> Option<f64> {
  if !prompt.is_empty() {
    print!("{prompt}");
    let _ = io::stdout().flush();
  }
  let mut line = String::new();
  io::stdin().read_line(&mut line).ok()?;
  line.trim().parse().ok()
}

fn read_hex_ptr(prompt: &str) -> *mut u8 {
  if !prompt.is_empty() {
    print!("{prompt}");
    let _ = io::stdout().flush();
  }
  let mut line = String::new();
  if io::stdin().read_line(&mut line).is_err() {
    return std::ptr::null_mut();
  }
  let trimmed = line.trim().trim_start_matches("0x");
  match usize::from_str_radix(trimmed, 16) {
    Ok(addr) => addr as *mut u8,
    Err(_) => std::ptr::null_mut(),
  }
}
