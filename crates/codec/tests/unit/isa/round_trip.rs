//! Property-based round-trip tests using proptest.
//!
//! These tests verify that encoding then decoding reproduces every field for
//! randomly generated, in-range instructions, and that any word the decoder
//! accepts re-encodes to itself.

use proptest::prelude::*;
use toothless_isa::isa::asm::parse;
use toothless_isa::{Instruction, Mnemonic, Operands, RegOp, decode, encode};

// ── Strategies ──────────────────────────────────────────────────────────

fn reg() -> impl Strategy<Value = u32> {
    0u32..32
}

fn reg_op() -> impl Strategy<Value = RegOp> {
    prop::sample::select(RegOp::ALL.to_vec())
}

fn mnemonic() -> impl Strategy<Value = Mnemonic> {
    prop::sample::select(Mnemonic::ALL.to_vec())
}

/// Immediate drawn from the legal range of the mnemonic's format.
fn operands_for(m: Mnemonic) -> impl Strategy<Value = Operands> {
    let imm: BoxedStrategy<i64> = match m {
        Mnemonic::Slli | Mnemonic::Srli | Mnemonic::Srai => (0i64..32).boxed(),
        Mnemonic::Lui | Mnemonic::Auipc => (0i64..=0xF_FFFF).boxed(),
        Mnemonic::Jal => (-524_288i64..=524_287).prop_map(|h| h * 2).boxed(),
        Mnemonic::Beq
        | Mnemonic::Bne
        | Mnemonic::Blt
        | Mnemonic::Bge
        | Mnemonic::Bltu
        | Mnemonic::Bgeu => (-2048i64..=2047).prop_map(|h| h * 2).boxed(),
        _ => (-2048i64..=2047).boxed(),
    };
    (reg(), reg(), reg(), imm).prop_map(|(rd, rs1, rs2, imm)| Operands { rd, rs1, rs2, imm })
}

fn any_instruction() -> impl Strategy<Value = (Mnemonic, Instruction)> {
    mnemonic().prop_flat_map(|m| {
        operands_for(m).prop_map(move |ops| {
            let instr = Instruction::from_mnemonic(m, ops)
                .unwrap_or_else(|e| panic!("{m} {ops:?}: {e}"));
            (m, instr)
        })
    })
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    #[test]
    fn encode_then_decode_is_identity((m, instr) in any_instruction()) {
        let word = encode(&instr);
        let back = decode(word).unwrap();
        prop_assert_eq!(back, instr);
        prop_assert_eq!(back.mnemonic(), Some(m));
        prop_assert_eq!(word & 0x7F, m.opcode());
    }

    #[test]
    fn register_operation_fields_survive(op in reg_op(), rd in reg(), rs1 in reg(), rs2 in reg()) {
        let instr = Instruction::r(op, rd, rs1, rs2).unwrap();
        let word = encode(&instr);
        prop_assert_eq!((word >> 12) & 0x7, op.funct3());
        prop_assert_eq!(word >> 25, op.funct7());
        prop_assert_eq!(decode(word).unwrap(), instr);
    }

    #[test]
    fn accepted_words_re_encode_to_themselves(word in any::<u32>()) {
        if let Ok(instr) = decode(word) {
            prop_assert_eq!(encode(&instr), word);
        }
    }

    #[test]
    fn rendered_assembly_parses_back((_m, instr) in any_instruction()) {
        let text = instr.to_string();
        prop_assert_eq!(parse(&text).unwrap(), instr, "{}", text);
    }

    #[test]
    fn serde_json_round_trip((_m, instr) in any_instruction()) {
        let json = serde_json::to_string(&instr).unwrap();
        let back: Instruction = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, instr);
    }
}
