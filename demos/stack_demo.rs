use std::fmt::Display;

use growable_stack_rs::GrowableStack;

fn print_size_pos<T: ?Sized>(stack: &GrowableStack<'_, T>) {
  println!("The stack's size:      {}", stack.capacity());
  println!("The stack's position:  {}\n", stack.len());
}

fn top<T: Display + ?Sized>(stack: &GrowableStack<'_, T>) {
  println!("Attempting to get the top element.");
  match stack.peek() {
    | Some(top) => println!("The top of the stack is \"{top}\".\n"),
    | None => eprintln!("The stack is empty!\n"),
  }
}

fn pop<T: Display + ?Sized>(stack: &mut GrowableStack<'_, T>) {
  println!("Attempting to pop the top element.");
  match stack.pop() {
    | Some(popped) => println!("The top of the stack is \"{popped}\".\n"),
    | None => eprintln!("The stack is empty!\n"),
  }
}

fn push<'a, T: Display + ?Sized>(stack: &mut GrowableStack<'a, T>, element: &'a T) {
  println!("Attempting to push \"{element}\" to stack.");
  stack.push(element);
  print_size_pos(stack);
}

fn main() {
  let arr: [i32; 12] = core::array::from_fn(|i| i as i32);
  let mut stack = GrowableStack::new();

  print_size_pos(&stack);

  push(&mut stack, &arr[1]);
  top(&stack);
  pop(&mut stack);

  push(&mut stack, &arr[1]);
  push(&mut stack, &arr[2]);
  top(&stack);
  push(&mut stack, &arr[3]);
  pop(&mut stack);
  pop(&mut stack);
  pop(&mut stack);

  // empty again
  print_size_pos(&stack);

  pop(&mut stack);
  print_size_pos(&stack);

  // twelve pushes cross the initial capacity
  for (i, value) in arr.iter().enumerate() {
    print!("{}\t", i + 1);
    push(&mut stack, value);
  }

  pop(&mut stack);
  top(&stack);

  let words = ["hi", "this", "is", "bob"];
  let mut stk_str: GrowableStack<'_, str> = GrowableStack::new();

  pop(&mut stk_str);
  top(&stk_str);
  top(&stk_str);
  print_size_pos(&stack);

  for (n, word) in words.iter().rev().enumerate() {
    print!("{}\t", n + 1);
    push(&mut stk_str, *word);
  }
}
