//! Mnemonic table tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use toothless_isa::isa::control::alu;
use toothless_isa::isa::rv32i::{funct3, funct7, opcodes};
use toothless_isa::{CodecError, Format, Mnemonic};

#[test]
fn table_holds_thirty_seven_distinct_names() {
    let mut names: Vec<&str> = Mnemonic::ALL.iter().map(|m| m.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 37);
}

#[test]
fn format_counts() {
    let count = |f: Format| Mnemonic::ALL.iter().filter(|m| m.format() == f).count();
    assert_eq!(count(Format::R), 10);
    assert_eq!(count(Format::I), 15);
    assert_eq!(count(Format::S), 3);
    assert_eq!(count(Format::B), 6);
    assert_eq!(count(Format::U), 2);
    assert_eq!(count(Format::J), 1);
}

#[rstest]
#[case(Mnemonic::Addi, opcodes::OP_IMM, Some(funct3::ADD_SUB), None)]
#[case(Mnemonic::Sub, opcodes::OP_REG, Some(funct3::ADD_SUB), Some(funct7::SUB))]
#[case(Mnemonic::Sra, opcodes::OP_REG, Some(funct3::SRL_SRA), Some(funct7::SRA))]
#[case(Mnemonic::Srai, opcodes::OP_IMM, Some(funct3::SRL_SRA), Some(funct7::ALT))]
#[case(Mnemonic::Slli, opcodes::OP_IMM, Some(funct3::SLL), Some(funct7::DEFAULT))]
#[case(Mnemonic::Lbu, opcodes::OP_LOAD, Some(funct3::LBU), None)]
#[case(Mnemonic::Sh, opcodes::OP_STORE, Some(funct3::SH), None)]
#[case(Mnemonic::Bltu, opcodes::OP_BRANCH, Some(funct3::BLTU), None)]
#[case(Mnemonic::Jalr, opcodes::OP_JALR, Some(funct3::JALR), None)]
#[case(Mnemonic::Lui, opcodes::OP_LUI, None, None)]
#[case(Mnemonic::Jal, opcodes::OP_JAL, None, None)]
fn mnemonic_fields(
    #[case] m: Mnemonic,
    #[case] opcode: u32,
    #[case] f3: Option<u32>,
    #[case] f7: Option<u32>,
) {
    assert_eq!(m.opcode(), opcode);
    assert_eq!(m.funct3(), f3);
    assert_eq!(m.funct7(), f7);
}

#[rstest]
#[case(Mnemonic::Beq, alu::EQ)]
#[case(Mnemonic::Bne, alu::NE)]
#[case(Mnemonic::Bge, alu::GES)]
#[case(Mnemonic::Bgeu, alu::GEU)]
#[case(Mnemonic::Sub, alu::SUB)]
#[case(Mnemonic::Srai, alu::SRA)]
#[case(Mnemonic::Lw, alu::ADD)]
#[case(Mnemonic::Auipc, alu::ADD)]
fn alu_operator_per_mnemonic(#[case] m: Mnemonic, #[case] code: u32) {
    assert_eq!(m.alu_op(), code);
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!("addi".parse::<Mnemonic>(), Ok(Mnemonic::Addi));
    assert_eq!("Bgeu".parse::<Mnemonic>(), Ok(Mnemonic::Bgeu));
    assert_eq!(
        "fence".parse::<Mnemonic>(),
        Err(CodecError::UnknownMnemonic("fence".to_owned()))
    );
}

#[test]
fn serializes_upper_case() {
    assert_eq!(serde_json::to_string(&Mnemonic::Lhu).unwrap(), "\"LHU\"");
    let m: Mnemonic = serde_json::from_str("\"SLTIU\"").unwrap();
    assert_eq!(m, Mnemonic::Sltiu);
}
