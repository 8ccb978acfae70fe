//! End-to-end scenarios: fixture programs through the loader and the
//! dispatch loop, asserting PRN output and observable machine state.

use std::path::PathBuf;

use ls8_core::{loader, Machine, VmError, STACK_INIT};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("programs")
        .join(name)
}

fn run_fixture(name: &str) -> Machine<Vec<u8>> {
    let image = loader::read_program(&fixture(name)).expect("load fixture");
    let mut machine = Machine::new(Vec::new());
    machine.load(&image).expect("fit in memory");
    machine.run().expect("clean halt");
    machine
}

fn output_of(machine: &Machine<Vec<u8>>) -> String {
    String::from_utf8(machine.output().clone()).expect("utf8 output")
}

#[test]
fn print8_prints_8() {
    let machine = run_fixture("print8.ls8");
    assert_eq!(output_of(&machine), "8\n");
    assert!(!machine.is_running());
}

#[test]
fn mult_prints_12() {
    let machine = run_fixture("mult.ls8");
    assert_eq!(output_of(&machine), "12\n");
}

#[test]
fn stack_pops_in_reverse_push_order() {
    let machine = run_fixture("stack.ls8");
    assert_eq!(output_of(&machine), "2\n1\n");
    assert_eq!(machine.registers().sp(), STACK_INIT);
}

#[test]
fn call_subroutine_preserves_caller_state() {
    let machine = run_fixture("call.ls8");
    // The subroutine prints its own value, then the caller prints R0,
    // which the subroutine saved and restored around its work.
    assert_eq!(output_of(&machine), "2\n10\n");
    assert_eq!(machine.registers().get(0).unwrap(), 10);
    assert_eq!(machine.registers().sp(), STACK_INIT);
}

#[test]
fn sctest_branches_print_1_4_5() {
    let machine = run_fixture("sctest.ls8");
    assert_eq!(output_of(&machine), "1\n4\n5\n");
}

#[test]
fn unknown_opcode_aborts_the_run() {
    let mut machine = Machine::new(Vec::new());
    machine.load(&[0b1111_1111]).unwrap();
    let err = machine.run().unwrap_err();
    assert!(matches!(
        err,
        VmError::UnknownOpcode {
            opcode: 0b1111_1111,
            addr: 0
        }
    ));
}

#[test]
fn missing_program_file_fails_at_load() {
    let err = loader::read_program(&fixture("no-such.ls8")).unwrap_err();
    assert!(matches!(err, VmError::Io(_)));
}
