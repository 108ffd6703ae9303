use sv2_wire::{Serialize, Seq0255, Seq064K, Str0255, B016M, B0255, B064K, U256};

/// ## CoinbaseOutputDataSize (Client -> Server)
/// Ultimately, the pool is responsible for adding coinbase transaction
/// outputs for payouts and other uses, and thus the Template Provider will
/// need to consider this additional block size when selecting transactions
/// for inclusion in a block. Thus, this message is used to indicate that some
/// additional space in the block/coinbase transaction must be reserved for
/// the pool's use. The Job Negotiator MUST discover the maximum serialized
/// size of the additional outputs which will be added by the pool(s) it
/// intends to use this work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinbaseOutputDataSize {
    /// The maximum additional serialized bytes which the pool will add in
    /// coinbase transaction outputs.
    pub coinbase_output_max_additional_size: u32,
}

message_codec!(CoinbaseOutputDataSize {
    coinbase_output_max_additional_size,
});

/// ## NewTemplate (Server -> Client)
/// The primary template-providing function. Note that the coinbase
/// transaction outputs are not provided here, as the mining server is
/// expected to append its own outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTemplate {
    /// Server's identification of the template. Strictly increasing, the
    /// current UNIX time may be used in place of an ID.
    pub template_id: u64,
    /// True if the template is intended for future [`SetNewPrevHash`]
    /// message sent on the channel. If False, the job relates to the last
    /// sent [`SetNewPrevHash`] message on the channel and the miner should
    /// start to work on the job immediately.
    pub future_template: bool,
    /// Valid header version field that reflects the current network
    /// consensus. The general purpose bits (as specified in BIP320) can be
    /// freely manipulated by the downstream node.
    pub version: u32,
    /// The coinbase transaction nVersion field.
    pub coinbase_tx_version: u32,
    /// Up to 8 bytes (not including the length byte) which are to be placed
    /// at the beginning of the coinbase field in the coinbase transaction.
    pub coinbase_prefix: B0255,
    /// The coinbase transaction input's nSequence field.
    pub coinbase_tx_input_sequence: u32,
    /// The value, in satoshis, available for spending in coinbase outputs
    /// added by the client. Includes the value of the block subsidy and
    /// anticipated fees.
    pub coinbase_tx_value_remaining: u64,
    /// The number of transaction outputs included in coinbase_tx_outputs.
    pub coinbase_tx_outputs_count: u32,
    /// Bitcoin transaction outputs to be included as the last outputs in the
    /// coinbase transaction.
    pub coinbase_tx_outputs: B064K,
    /// The locktime field in the coinbase transaction.
    pub coinbase_tx_locktime: u32,
    /// Merkle path hashes ordered from deepest.
    pub merkle_path: Seq0255<U256>,
}

message_codec!(NewTemplate {
    template_id,
    future_template,
    version,
    coinbase_tx_version,
    coinbase_prefix,
    coinbase_tx_input_sequence,
    coinbase_tx_value_remaining,
    coinbase_tx_outputs_count,
    coinbase_tx_outputs,
    coinbase_tx_locktime,
    merkle_path,
});

/// ## SetNewPrevHash (Server -> Client)
/// Upon successful validation of a new best block, the server MUST
/// immediately provide a SetNewPrevHash message. If a [`NewTemplate`] message
/// has previously been sent with the `future_template` flag set, which is
/// valid work based on the `prev_hash` contained in this message, the
/// `template_id` field SHOULD be set to the `job_id` present in that
/// [`NewTemplate`] message indicating the client MUST begin mining on that
/// template as soon as possible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetNewPrevHash {
    /// The `template_id` referenced in a previous [`NewTemplate`] message.
    pub template_id: u64,
    /// Previous block's hash, as it must appear in the next block's header.
    pub prev_hash: U256,
    /// The `nTime` field in the block header at which the client should
    /// start (usually current time). This is NOT the minimum valid `nTime`
    /// value.
    pub header_timestamp: u32,
    /// Block header field.
    pub n_bits: u32,
    /// The maximum double-SHA256 hash value which would represent a valid
    /// block. Note that this may be lower than the target implied by `n_bits`
    /// in several cases, including weak-block based block propagation.
    pub target: U256,
}

message_codec!(SetNewPrevHash {
    template_id,
    prev_hash,
    header_timestamp,
    n_bits,
    target,
});

/// ## RequestTransactionData (Client -> Server)
/// A request sent by the Job Negotiator to the Template Provider which
/// requests the set of transaction data for all transactions (excluding the
/// coinbase transaction) included in a block, as well as any additional data
/// which may be required by the Pool to validate the work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTransactionData {
    /// The `template_id` corresponding to a [`NewTemplate`] message.
    pub template_id: u64,
}

message_codec!(RequestTransactionData { template_id });

/// ## RequestTransactionData.Success (Server -> Client)
/// A response to [`RequestTransactionData`] which contains the set of full
/// transaction data and excess data required for validation. For practical
/// purposes, the excess data is usually the SegWit commitment, however the
/// Job Negotiator MUST NOT parse or interpret the excess data in any way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTransactionDataSuccess {
    /// The `template_id` corresponding to a [`NewTemplate`] message.
    pub template_id: u64,
    /// Extra data which the Pool may require to validate the work.
    pub excess_data: B064K,
    /// The transaction data, serialized as a series of Bitcoin transactions.
    pub transaction_list: Seq064K<B016M>,
}

message_codec!(RequestTransactionDataSuccess {
    template_id,
    excess_data,
    transaction_list,
});

/// ## RequestTransactionData.Error (Server -> Client)
/// Sent by the Template Provider when it is unable to send the transaction
/// data in a [`RequestTransactionDataSuccess`] message.
///
/// ### Possible error codes:
/// * `template-id-not-found`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTransactionDataError {
    /// The `template_id` corresponding to a [`NewTemplate`] message.
    pub template_id: u64,
    /// Human-readable error code.
    pub error_code: Str0255,
}

message_codec!(RequestTransactionDataError {
    template_id,
    error_code,
});

/// ## SubmitSolution (Client -> Server)
/// Upon finding a coinbase transaction/nonce pair which double-SHA256 hashes
/// at or below [`SetNewPrevHash::target`], the client MUST immediately send
/// this message, and the server MUST then immediately construct the
/// corresponding full block and attempt to propagate it to the Bitcoin
/// network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitSolution {
    /// The `template_id` referenced in a previous [`NewTemplate`] message.
    pub template_id: u64,
    /// The version field in the block header. Bits not defined by BIP320 as
    /// additional nonce MUST be the same as they appear in the
    /// [`NewTemplate`] message, other bits may be set to any value.
    pub version: u32,
    /// The `nTime` field in the block header. This MUST be greater than or
    /// equal to the `header_timestamp` field in the latest [`SetNewPrevHash`]
    /// message and lower than or equal to that value plus the number of
    /// seconds since the receipt of that message.
    pub header_timestamp: u32,
    /// The nonce field in the header.
    pub header_nonce: u32,
    /// The full serialized coinbase transaction, meeting all the requirements
    /// of the [`NewTemplate`] message.
    pub coinbase_tx: B064K,
}

message_codec!(SubmitSolution {
    template_id,
    version,
    header_timestamp,
    header_nonce,
    coinbase_tx,
});

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::convert::TryInto;
    use quickcheck_macros::quickcheck;
    use sv2_wire::{from_bytes, to_bytes};

    pub(crate) fn new_template() -> NewTemplate {
        NewTemplate {
            template_id: 71,
            future_template: true,
            version: 0x2000_0000,
            coinbase_tx_version: 2,
            coinbase_prefix: vec![3, 76, 163, 38].try_into().unwrap(),
            coinbase_tx_input_sequence: u32::MAX,
            coinbase_tx_value_remaining: 625_000_000,
            coinbase_tx_outputs_count: 0,
            coinbase_tx_outputs: B064K::default(),
            coinbase_tx_locktime: 0,
            merkle_path: Seq0255::new(vec![[0xab_u8; 32].into(), [0xcd_u8; 32].into()])
                .unwrap(),
        }
    }

    #[test]
    fn new_template_round_trip() {
        let message = new_template();
        let bytes = to_bytes(&message);
        assert_eq!(bytes.len(), message.get_size());
        assert_eq!(from_bytes::<NewTemplate>(&bytes), Ok(message));
    }

    #[test]
    fn new_template_with_empty_merkle_path_round_trips() {
        let message = NewTemplate {
            merkle_path: Seq0255::default(),
            ..new_template()
        };
        assert_eq!(from_bytes::<NewTemplate>(&to_bytes(&message)), Ok(message));
    }

    #[test]
    fn set_new_prev_hash_is_fixed_size() {
        let message = SetNewPrevHash {
            template_id: 71,
            prev_hash: [9_u8; 32].into(),
            header_timestamp: 1_614_000_000,
            n_bits: 0x1703_1abe,
            target: [0xff_u8; 32].into(),
        };
        let bytes = to_bytes(&message);
        assert_eq!(bytes.len(), 8 + 32 + 4 + 4 + 32);
        assert_eq!(from_bytes::<SetNewPrevHash>(&bytes), Ok(message));
    }

    #[test]
    fn request_transaction_data_success_round_trip() {
        let message = RequestTransactionDataSuccess {
            template_id: 71,
            excess_data: vec![0_u8; 36].try_into().unwrap(),
            transaction_list: Seq064K::new(vec![
                vec![1_u8; 60].try_into().unwrap(),
                vec![2_u8; 200].try_into().unwrap(),
            ])
            .unwrap(),
        };
        let bytes = to_bytes(&message);
        assert_eq!(
            from_bytes::<RequestTransactionDataSuccess>(&bytes),
            Ok(message)
        );
    }

    #[quickcheck]
    fn submit_solution_round_trip(
        template_id: u64,
        version: u32,
        header_timestamp: u32,
        header_nonce: u32,
        coinbase_tx: Vec<u8>,
    ) -> bool {
        let coinbase_tx = match coinbase_tx.try_into() {
            Ok(v) => v,
            Err(_) => return true,
        };
        let message = SubmitSolution {
            template_id,
            version,
            header_timestamp,
            header_nonce,
            coinbase_tx,
        };
        from_bytes::<SubmitSolution>(&to_bytes(&message)) == Ok(message)
    }
}
