use std::io::Write;

use crate::calculator::menu::MenuChoice;
use crate::calculator::source::LineSource;
use crate::error::Result;
use crate::gates::gate::Gate;

/// Menu-driven calculator: pick a gate, enter its bits, see the result.
pub struct Calculator<S, W> {
    source: S,
    out: W,
    running: bool,
}

/// `1 AND 0 = 0` for binary gates, `NOT 1 = 0` for NOT.
pub fn describe_operation(gate: Gate, inputs: &[u8], output: u8) -> String {
    match inputs {
        [a] => format!("{gate} {a} = {output}"),
        [a, b] => format!("{a} {gate} {b} = {output}"),
        _ => {
            let args: Vec<String> = inputs.iter().map(u8::to_string).collect();
            format!("{gate}({}) = {output}", args.join(", "))
        }
    }
}

impl<S: LineSource, W: Write> Calculator<S, W> {
    pub fn new(source: S, out: W) -> Calculator<S, W> {
        Calculator { source, out, running: true }
    }

    /// Runs until the user picks Exit or the input runs out.
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            self.display_menu()?;
            let line = match self.ask("Select operation: ")? {
                Some(line) => line,
                None => break,
            };
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Operation(gate)) => self.perform(gate)?,
                Ok(MenuChoice::Exit) => self.exit()?,
                Err(()) => {
                    log::warn!("rejected menu choice {line:?}");
                    writeln!(self.out, "Invalid choice. Please select a valid operation (1-7).")?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the calculator, handing back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.source.shows_prompt() {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
        }
        self.source.read_line(prompt)
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== BOOLEAN LOGIC CALCULATOR ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.number(), choice)?;
        }
        Ok(())
    }

    fn perform(&mut self, gate: Gate) -> Result<()> {
        let names: &[&str] = if gate.arity() == 1 { &["Input"] } else { &["Input A", "Input B"] };
        let mut inputs = Vec::with_capacity(names.len());
        for name in names {
            match self.read_bit(name)? {
                Some(bit) => inputs.push(bit),
                None => {
                    self.running = false;
                    return Ok(());
                }
            }
        }
        let output = gate.eval(&inputs)?;
        log::info!("{}", describe_operation(gate, &inputs, output));
        writeln!(self.out, "Result: {output}")?;
        writeln!(self.out, "{}", describe_operation(gate, &inputs, output))?;
        Ok(())
    }

    /// Prompts until a 0 or 1 is entered; `None` when input runs out.
    fn read_bit(&mut self, name: &str) -> Result<Option<u8>> {
        let prompt = format!("{name} (0 or 1): ");
        loop {
            let line = match self.ask(&prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.trim() {
                "0" => return Ok(Some(0)),
                "1" => return Ok(Some(1)),
                other => {
                    log::warn!("rejected bit {other:?} for {name}");
                    writeln!(self.out, "Please enter 0 or 1.")?;
                }
            }
        }
    }

    fn exit(&mut self) -> Result<()> {
        writeln!(self.out, "Thank you for using Boolean Logic Calculator. Goodbye!")?;
        self.running = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::source::ReaderSource;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut calc = Calculator::new(ReaderSource::new(Cursor::new(script.to_owned())), Vec::new());
        calc.run().unwrap();
        String::from_utf8(calc.into_output()).unwrap()
    }

    #[test]
    fn computes_and_exits() {
        let out = run_script("1\n1\n0\n7\n");
        assert!(out.contains("=== BOOLEAN LOGIC CALCULATOR ===\n1. AND Operation\n"));
        assert!(out.contains("7. Exit Program\n"));
        assert!(out.contains("Result: 0\n1 AND 0 = 0\n"));
        assert!(out.ends_with("Thank you for using Boolean Logic Calculator. Goodbye!\n"));
    }

    #[test]
    fn not_takes_one_input() {
        let out = run_script("3\n0\n7\n");
        assert!(out.contains("Result: 1\nNOT 0 = 1\n"));
    }

    #[test]
    fn nand_and_nor() {
        let out = run_script("5\n1\n1\n6\n0\n0\n7\n");
        assert!(out.contains("1 NAND 1 = 0\n"));
        assert!(out.contains("0 NOR 0 = 1\n"));
    }

    #[test]
    fn invalid_choice_shows_message() {
        let out = run_script("9\nfoo\n7\n");
        assert_eq!(
            out.matches("Invalid choice. Please select a valid operation (1-7).").count(),
            2
        );
        assert_eq!(out.matches("=== BOOLEAN LOGIC CALCULATOR ===").count(), 3);
    }

    #[test]
    fn non_bits_are_reprompted() {
        let out = run_script("4\n2\n1\nx\n1\n7\n");
        assert_eq!(out.matches("Please enter 0 or 1.").count(), 2);
        assert!(out.contains("1 XOR 1 = 0\n"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let out = run_script("2\n1\n");
        assert!(!out.contains("Result:"));
        assert!(!out.contains("Goodbye"));
        assert_eq!(
            run_script(""),
            "\n=== BOOLEAN LOGIC CALCULATOR ===\n\
             1. AND Operation\n2. OR Operation\n3. NOT Operation\n4. XOR Operation\n\
             5. NAND Operation\n6. NOR Operation\n7. Exit Program\nSelect operation: "
        );
    }

    #[test]
    fn plain_input_prints_prompts() {
        let out = run_script("2\n0\n1\n7\n");
        assert!(out.contains(
            "7. Exit Program\nSelect operation: Input A (0 or 1): Input B (0 or 1): Result: 1\n0 OR 1 = 1\n"
        ));
    }

    #[test]
    fn describes_operations() {
        assert_eq!(describe_operation(Gate::Or, &[0, 1], 1), "0 OR 1 = 1");
        assert_eq!(describe_operation(Gate::Not, &[1], 0), "NOT 1 = 0");
    }
}
